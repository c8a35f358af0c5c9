//! Request definitions, one [`Endpoint`](cloud_api_framework::Endpoint) per API operation.

mod account;
mod catalogs;
mod instances;
mod objects;
mod offerings;
mod operators;
mod versions;

pub use account::*;
pub use catalogs::*;
pub use instances::*;
pub use objects::*;
pub use offerings::*;
pub use operators::*;
pub use versions::*;

use cloud_api_framework::{
    reqwest::header::{HeaderMap, HeaderValue},
    Error,
};
use serde::Serialize;

const X_AUTH_TOKEN: &str = "x-auth-token";
const X_AUTH_REFRESH_TOKEN: &str = "x-auth-refresh-token";
const X_APPROVER_TOKEN: &str = "x-approver-token";
const IF_MATCH: &str = "if-match";

const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Query of the audit log listings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListAuditsParams {
    /// Start token for a page.
    pub start: Option<String>,
    /// The maximum number of results to return.
    pub limit: Option<i64>,
    /// Auditlog Lookup Names - by default names are not returned in auditlog.
    pub lookupnames: Option<bool>,
}

/// Query of a single audit log lookup.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GetAuditParams {
    pub lookupnames: Option<bool>,
}

/// Builds the optional headers of a request, skipping unset values.
fn header_map<'a>(
    headers: impl IntoIterator<Item = (&'static str, Option<&'a str>)>,
) -> Option<HeaderMap> {
    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        if let Some(value) = value.and_then(|value| HeaderValue::from_str(value).ok()) {
            header_map.insert(name, value);
        }
    }
    (!header_map.is_empty()).then_some(header_map)
}

/// Fails if a header parameter is set to a value that cannot be sent.
fn validate_header(arg: &str, value: Option<&str>) -> Result<(), Error> {
    match value.map(HeaderValue::from_str) {
        Some(Err(err)) => Err(Error::InvalidArgument {
            arg: arg.to_string(),
            error: err.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_map_skips_unset_values() {
        assert!(header_map([(X_AUTH_TOKEN, None)]).is_none());

        let headers = header_map([(X_AUTH_TOKEN, Some("token")), (IF_MATCH, None)]).unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[X_AUTH_TOKEN], "token");
    }

    #[test]
    fn invalid_header_value_fails_validation() {
        assert!(validate_header("x_auth_token", Some("token")).is_ok());
        assert!(validate_header("x_auth_token", None).is_ok());
        assert!(validate_header("x_auth_token", Some("bad\nvalue")).is_err());
    }
}
