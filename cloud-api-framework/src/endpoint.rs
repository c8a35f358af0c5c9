use crate::Error;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt::Debug};
use url::Url;

/// Characters outside of the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How the body of a successful response should be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The body is a JSON document. An empty body is treated as `null`.
    #[default]
    Json,
    /// The body is UTF-8 text and is handed to the response type as a string.
    Text,
    /// The body is handed to the response type as raw bytes (see [`crate::RawBody`]).
    Binary,
}

/// Represents a specification for an API call that can be built into an HTTP request and sent.
/// New endpoints should implement this trait.
///
/// If the request succeeds, the call will resolve to a `Response`.
pub trait Endpoint {
    type Response: for<'a> Deserialize<'a> + Debug;

    /// The HTTP Method used for this endpoint (e.g. GET, PATCH, DELETE)
    fn method(&self) -> reqwest::Method;

    /// The relative URL path for this endpoint. Path parameters must already be
    /// encoded with [`encode_path_segment`].
    fn path(&self) -> String;

    /// The url-encoded query string associated with this endpoint. Defaults to `None`.
    ///
    /// Implementors should inline this.
    #[inline]
    fn query(&self) -> Option<String> {
        None
    }

    /// The set of headers to be sent with request. Defaults to `None`.
    ///
    /// Implementors should inline this.
    #[inline]
    fn headers(&self) -> Option<reqwest::header::HeaderMap> {
        None
    }

    /// The HTTP body associated with this endpoint. If not implemented, defaults to `None`.
    ///
    /// Implementors should inline this.
    #[inline]
    fn body(&self) -> Option<String> {
        None
    }

    /// Checks required parameters before anything is sent. Defaults to `Ok(())`.
    #[inline]
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Builds and returns a formatted full URL, including query, for the endpoint.
    ///
    /// The endpoint path is appended to the path of `base_url`, so a service url
    /// like `https://host/api/v1` keeps its `/api/v1` prefix.
    ///
    /// Implementors should generally not override this.
    fn url(&self, base_url: &Url) -> Url {
        let mut url = base_url.clone();
        let path = format!(
            "{}/{}",
            base_url.path().trim_end_matches('/'),
            self.path().trim_start_matches('/')
        );
        url.set_path(&path);
        url.set_query(self.query().as_deref());
        url
    }

    /// If `body` is populated, indicates the body MIME type (defaults to JSON).
    ///
    /// Implementors generally do not need to override this.
    fn content_type(&self) -> Cow<'static, str> {
        Cow::Borrowed("application/json")
    }

    /// The value of the `Accept` header (defaults to JSON).
    fn accept(&self) -> Cow<'static, str> {
        Cow::Borrowed("application/json")
    }

    /// How a successful response body is decoded (defaults to JSON).
    fn response_format(&self) -> ResponseFormat {
        ResponseFormat::Json
    }
}

/// A utility function for serializing parameters into a URL query string.
///
/// Returns `None` when every parameter is absent, so no dangling `?` is appended.
#[inline]
pub fn serialize_query<Q: Serialize>(q: &Q) -> Option<String> {
    serde_urlencoded::to_string(q)
        .ok()
        .filter(|query| !query.is_empty())
}

/// A utility function for serializing a request body into JSON.
///
/// A body that cannot be serialized is logged and left out of the request.
#[inline]
pub fn serialize_body<B: Serialize>(b: &B) -> Option<String> {
    serde_json::to_string(b)
        .inspect_err(|err| tracing::warn!(error = %err, "request body is not serializable"))
        .ok()
}

/// Percent-encodes a single path parameter so it can be interpolated into [`Endpoint::path`].
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Fails with [`Error::InvalidArgument`] when a required parameter is empty.
pub fn require_non_empty(arg: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidArgument {
            arg: arg.to_string(),
            error: "must be set".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use rstest::rstest;

    struct GetThing {
        id: String,
        query: Option<String>,
    }

    impl Endpoint for GetThing {
        type Response = ();

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            format!("/things/{}", encode_path_segment(&self.id))
        }

        fn query(&self) -> Option<String> {
            self.query.clone()
        }
    }

    #[rstest]
    #[case("https://host/api/v1-beta", "https://host/api/v1-beta/things/abc")]
    #[case("https://host/api/v1-beta/", "https://host/api/v1-beta/things/abc")]
    #[case("https://host", "https://host/things/abc")]
    fn url_keeps_base_path(#[case] base: &str, #[case] expected: &str) {
        let endpoint = GetThing {
            id: "abc".to_string(),
            query: None,
        };
        let url = endpoint.url(&Url::parse(base).unwrap());
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn url_contains_query() {
        let endpoint = GetThing {
            id: "abc".to_string(),
            query: Some("limit=10&start=xyz".to_string()),
        };
        let url = endpoint.url(&Url::parse("https://host/api").unwrap());
        assert_eq!(url.as_str(), "https://host/api/things/abc?limit=10&start=xyz");
    }

    #[rstest]
    #[case("plain-id_1.2~x", "plain-id_1.2~x")]
    #[case("a/b", "a%2Fb")]
    #[case("with space", "with%20space")]
    #[case("q?x=1", "q%3Fx%3D1")]
    fn path_segments_are_encoded(#[case] segment: &str, #[case] expected: &str) {
        assert_eq!(encode_path_segment(segment), expected);
    }

    #[test]
    fn empty_query_is_none() {
        #[derive(Serialize)]
        struct Params {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<i64>,
        }

        assert_eq!(serialize_query(&Params { limit: None }), None);
        assert_eq!(
            serialize_query(&Params { limit: Some(5) }),
            Some("limit=5".to_string())
        );
    }

    #[test]
    fn unserializable_body_is_left_out() {
        let body: std::collections::BTreeMap<(i32, i32), i32> = [((1, 2), 3)].into();
        assert_eq!(serialize_body(&body), None);
        assert_eq!(serialize_body(&[1, 2]), Some("[1,2]".to_string()));
    }

    #[test]
    fn empty_required_argument_is_rejected() {
        let err = require_non_empty("catalog_identifier", "").unwrap_err();
        assert!(
            matches!(&err, Error::InvalidArgument { arg, .. } if arg == "catalog_identifier"),
            "unexpected error: {err:?}"
        );
        assert!(require_non_empty("catalog_identifier", "abc").is_ok());
    }
}
