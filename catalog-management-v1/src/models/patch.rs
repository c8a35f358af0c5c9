use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The operation performed by a [`JsonPatchOperation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPatchOperationOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// A single RFC 6902 JSON patch operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: JsonPatchOperationOp,
    /// JSON pointer to the target location.
    pub path: String,
    /// JSON pointer to the source location, for `move` and `copy`.
    pub from: Option<String>,
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    fn new(op: JsonPatchOperationOp, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(JsonPatchOperationOp::Add, path)
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(JsonPatchOperationOp::Remove, path)
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(JsonPatchOperationOp::Replace, path)
        }
    }

    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new(JsonPatchOperationOp::Move, path)
        }
    }

    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new(JsonPatchOperationOp::Copy, path)
        }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(JsonPatchOperationOp::Test, path)
        }
    }

    /// `add` when the target does not exist yet, `replace` otherwise.
    pub fn add_or_replace(exists: bool, path: impl Into<String>, value: impl Into<Value>) -> Self {
        if exists {
            Self::replace(path, value)
        } else {
            Self::add(path, value)
        }
    }
}

/// Escapes a single JSON pointer reference token.
pub fn escape_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Builds the operations turning `old` into `new`.
///
/// Objects are compared key by key. Arrays and scalars that differ are replaced whole.
pub fn diff(old: &Value, new: &Value) -> Vec<JsonPatchOperation> {
    let mut operations = Vec::new();
    diff_into(String::new(), old, new, &mut operations);
    operations
}

fn diff_into(path: String, old: &Value, new: &Value, operations: &mut Vec<JsonPatchOperation>) {
    if old == new {
        return;
    }
    match (old, new) {
        (Value::Object(old), Value::Object(new)) => {
            for key in old.keys().filter(|key| !new.contains_key(*key)) {
                operations.push(JsonPatchOperation::remove(child_path(&path, key)));
            }
            for (key, new_value) in new {
                let child = child_path(&path, key);
                match old.get(key) {
                    Some(old_value) => diff_into(child, old_value, new_value, operations),
                    None => operations.push(JsonPatchOperation::add(child, new_value.clone())),
                }
            }
        }
        _ => operations.push(JsonPatchOperation::replace(path, new.clone())),
    }
}

fn child_path(parent: &str, key: &str) -> String {
    format!("{parent}/{}", escape_pointer_segment(key))
}

/// Non-null top-level fields of `prototype`, usable as a merge-patch body.
pub fn as_merge_patch<T: Serialize>(
    prototype: &T,
) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(prototype)? {
        Value::Object(mut fields) => {
            fields.retain(|_, value| !value.is_null());
            Ok(fields)
        }
        other => Err(serde::ser::Error::custom(format!(
            "merge patch prototype must serialize to an object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Offering;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn operations_serialize_to_wire_format() {
        let operations = vec![
            JsonPatchOperation::add("/tags", json!(["a"])),
            JsonPatchOperation::remove("/label"),
            JsonPatchOperation::move_from("/a", "/b"),
            JsonPatchOperation::replace("/disabled", Value::Null),
        ];
        assert_eq!(
            serde_json::to_value(&operations).unwrap(),
            json!([
                {"op": "add", "path": "/tags", "value": ["a"]},
                {"op": "remove", "path": "/label"},
                {"op": "move", "path": "/b", "from": "/a"},
                {"op": "replace", "path": "/disabled", "value": null},
            ])
        );
    }

    #[test]
    fn add_or_replace_depends_on_current_value() {
        let path = "/kinds/0/versions/0/tags";
        assert_eq!(
            JsonPatchOperation::add_or_replace(false, path, json!(["x"])).op,
            JsonPatchOperationOp::Add
        );
        assert_eq!(
            JsonPatchOperation::add_or_replace(true, path, json!(["x"])).op,
            JsonPatchOperationOp::Replace
        );
    }

    #[test]
    fn diff_walks_objects_and_replaces_leaves() {
        let old = json!({
            "label": "old",
            "keep": 1,
            "gone": true,
            "nested": {"a": 1, "b": [1, 2]},
        });
        let new = json!({
            "label": "new",
            "keep": 1,
            "nested": {"a": 1, "b": [1, 2, 3], "c": "x"},
            "a/b~c": null,
        });
        let mut operations = diff(&old, &new);
        operations.sort_by(|a, b| a.path.cmp(&b.path));
        assert_eq!(
            operations,
            vec![
                JsonPatchOperation::add("/a~1b~0c", Value::Null),
                JsonPatchOperation::remove("/gone"),
                JsonPatchOperation::replace("/label", "new"),
                JsonPatchOperation::replace("/nested/b", json!([1, 2, 3])),
                JsonPatchOperation::add("/nested/c", "x"),
            ]
        );
    }

    #[test]
    fn diff_of_equal_values_is_empty() {
        let value = json!({"a": [1, {"b": 2}]});
        assert!(diff(&value, &value).is_empty());
    }

    #[test]
    fn diff_replaces_root_on_type_change() {
        assert_eq!(
            diff(&json!([1]), &json!({"a": 1})),
            vec![JsonPatchOperation::replace("", json!({"a": 1}))]
        );
    }

    #[test]
    fn merge_patch_keeps_only_set_fields() {
        let prototype = Offering {
            label: Some("label".into()),
            tags: Some(vec!["dev".into()]),
            ..Default::default()
        };
        let patch = as_merge_patch(&prototype).unwrap();
        assert_eq!(
            Value::Object(patch),
            json!({"label": "label", "tags": ["dev"]})
        );
    }

    #[test]
    fn merge_patch_rejects_non_objects() {
        assert!(as_merge_patch(&vec![1, 2]).is_err());
    }
}
