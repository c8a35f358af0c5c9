mod common;

use catalog_management_v1::{
    endpoints::{
        GetOfferingAbout, GetOfferingSource, GetOfferingSourceParams, GetVersion, ImportOffering,
        ImportOfferingParams, PatchUpdateVersion, SetDeprecateVersion, SetDeprecateVersionBody,
        UpdateOffering,
    },
    models::{patch, ImportOfferingBody, JsonPatchOperation, Offering, VersionLocator},
};
use common::api_path;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn import_offering_with_token_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/catalogs/catalog-1/import/offerings")))
        .and(query_param("offeringID", "offering-1"))
        .and(header("x-auth-token", "git-token"))
        .and(body_json(json!({
            "content": "dmVyc2lvbjogMQ==",
            "target_kinds": ["terraform"],
            "install_kind": "instance"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "offering-1",
            "catalog_id": "catalog-1",
            "kinds": [{"format_kind": "terraform", "versions": [{"id": "v1", "version": "1.0.0"}]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let offering = client
        .request(&ImportOffering {
            catalog_identifier: "catalog-1".to_string(),
            params: ImportOfferingParams {
                offering_id: Some("offering-1".to_string()),
            },
            x_auth_token: Some("git-token".to_string()),
            body: ImportOfferingBody {
                content: Some(b"version: 1".to_vec()),
                target_kinds: Some(vec!["terraform".to_string()]),
                install_kind: Some("instance".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(offering.id.as_deref(), Some("offering-1"));
    assert_eq!(offering.kinds.map(|kinds| kinds.len()), Some(1));
}

#[tokio::test]
async fn update_offering_with_json_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/catalogs/catalog-1/offerings/offering-1")))
        .and(header("if-match", "\"2-def\""))
        .and(header("content-type", "application/json-patch+json"))
        .and(body_json(json!([
            {"op": "add", "path": "/tags", "value": ["dev"]},
            {"op": "replace", "path": "/label", "value": "New label"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "offering-1",
            "_rev": "3-ghi",
            "label": "New label",
            "tags": ["dev"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let current = Offering {
        id: Some("offering-1".to_string()),
        rev: Some("2-def".to_string()),
        label: Some("Old label".to_string()),
        ..Default::default()
    };
    let operations = vec![
        JsonPatchOperation::add_or_replace(current.tags.is_some(), "/tags", json!(["dev"])),
        JsonPatchOperation::add_or_replace(current.label.is_some(), "/label", "New label"),
    ];

    let client = common::client(&server).await;
    let updated = client
        .request(&UpdateOffering {
            catalog_identifier: "catalog-1".to_string(),
            offering_id: "offering-1".to_string(),
            if_match: format!("\"{}\"", current.rev.as_deref().unwrap()),
            operations,
        })
        .await
        .unwrap();

    assert_eq!(updated.rev.as_deref(), Some("3-ghi"));
}

#[tokio::test]
async fn patch_version_from_diff() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(api_path("/versions/catalog-1.version-1")))
        .and(header("if-match", "\"1-abc\""))
        .and(body_json(json!([
            {"op": "replace", "path": "/kinds/0/versions/0/tags", "value": ["a", "b"]}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "offering-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let old = json!({"kinds": [{"versions": [{"tags": ["a"]}]}]});
    let new = json!({"kinds": [{"versions": [{"tags": ["a", "b"]}]}]});
    // arrays are replaced whole, so patch the version tags directly
    let operations = patch::diff(
        &old["kinds"][0]["versions"][0],
        &new["kinds"][0]["versions"][0],
    )
    .into_iter()
    .map(|operation| JsonPatchOperation {
        path: format!("/kinds/0/versions/0{}", operation.path),
        ..operation
    })
    .collect();

    let client = common::client(&server).await;
    client
        .request(&PatchUpdateVersion {
            version_loc_id: VersionLocator::new("catalog-1", "version-1").to_string(),
            if_match: "\"1-abc\"".to_string(),
            operations,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn get_version_returns_offering() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/versions/catalog-1.version-2")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "offering-1",
            "kinds": [{
                "versions": [
                    {"id": "version-1", "created": "2024-01-01T00:00:00Z"},
                    {"id": "version-2", "created": "2024-06-01T00:00:00Z", "version_locator": "catalog-1.version-2"}
                ]
            }]
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let offering = client
        .request(&GetVersion {
            version_loc_id: "catalog-1.version-2".to_string(),
        })
        .await
        .unwrap();

    let latest = offering.latest_version().expect("offering has versions");
    let locator: VersionLocator = latest
        .version_locator
        .as_deref()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(locator, VersionLocator::new("catalog-1", "version-2"));
}

#[tokio::test]
async fn set_deprecate_version() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/versions/catalog-1.version-1/deprecate/true")))
        .and(body_json(json!({"description": "use 2.0", "days_until_deprecate": 90})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    client
        .request(&SetDeprecateVersion {
            version_loc_id: "catalog-1.version-1".to_string(),
            setting: "true".to_string(),
            body: SetDeprecateVersionBody {
                description: Some("use 2.0".to_string()),
                days_until_deprecate: Some(90),
            },
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn offering_about_as_markdown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/versions/catalog-1.version-1/about")))
        .and(header("accept", "text/markdown"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Readme\n\nHello"))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let about = client
        .request(&GetOfferingAbout {
            version_loc_id: "catalog-1.version-1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(about, "# Readme\n\nHello");
}

#[tokio::test]
async fn offering_source_as_bytes() {
    let server = MockServer::start().await;
    let archive = vec![0x1f, 0x8b, 0x08, 0x00, 0xff];
    Mock::given(method("GET"))
        .and(path(api_path("/offering/source")))
        .and(query_param("version", "1.0.0"))
        .and(query_param("catalogID", "catalog-1"))
        .and(query_param("kind", "terraform"))
        .and(header("accept", "application/yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let source = client
        .request(&GetOfferingSource {
            params: GetOfferingSourceParams {
                version: "1.0.0".to_string(),
                catalog_id: Some("catalog-1".to_string()),
                kind: Some("terraform".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(source.0.as_ref(), archive.as_slice());
}
