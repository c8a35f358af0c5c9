use crate::Error;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Decorates outgoing requests with credentials.
///
/// Acquiring and refreshing tokens is left to implementors; the client only asks
/// for headers right before each request is sent.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync + 'static {
    fn authentication_type(&self) -> &'static str;

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error>;
}

/// Sends requests without credentials.
#[derive(Clone, Debug, Default)]
pub struct NoAuthAuthenticator;

#[async_trait::async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        "noAuth"
    }

    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), Error> {
        Ok(())
    }
}

/// Sends a caller-provided bearer token with every request.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    authorization: HeaderValue,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl AsRef<str>) -> Result<Self, Error> {
        let bearer_token = bearer_token.as_ref();
        if bearer_token.is_empty() {
            return Err(Error::Authentication(
                "bearer token must not be empty".to_string(),
            ));
        }
        let mut authorization = HeaderValue::from_str(&format!("Bearer {bearer_token}"))
            .map_err(|err| Error::Authentication(format!("invalid bearer token: {err}")))?;
        authorization.set_sensitive(true);
        Ok(Self { authorization })
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        "bearerToken"
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        headers.insert(AUTHORIZATION, self.authorization.clone());
        Ok(())
    }
}

/// Sends HTTP basic credentials with every request.
#[derive(Clone)]
pub struct BasicAuthenticator {
    authorization: HeaderValue,
}

impl BasicAuthenticator {
    pub fn new(username: &str, password: &str) -> Result<Self, Error> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::Authentication(
                "username and password must not be empty".to_string(),
            ));
        }
        if username.contains(':') {
            return Err(Error::Authentication(
                "username must not contain ':'".to_string(),
            ));
        }
        let credentials = STANDARD.encode(format!("{username}:{password}"));
        let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|err| Error::Authentication(format!("invalid credentials: {err}")))?;
        authorization.set_sensitive(true);
        Ok(Self { authorization })
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        "basic"
    }

    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        headers.insert(AUTHORIZATION, self.authorization.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn bearer_token_sets_authorization() {
        let authenticator = BearerTokenAuthenticator::new("my-token").unwrap();
        let mut headers = HeaderMap::new();
        authenticator.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer my-token");
    }

    #[tokio::test]
    async fn basic_auth_encodes_credentials() {
        let authenticator = BasicAuthenticator::new("user", "pass").unwrap();
        let mut headers = HeaderMap::new();
        authenticator.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Basic dXNlcjpwYXNz");
    }

    #[tokio::test]
    async fn no_auth_leaves_headers_untouched() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).await.unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(matches!(
            BearerTokenAuthenticator::new(""),
            Err(Error::Authentication(_))
        ));
        assert!(matches!(
            BasicAuthenticator::new("user:name", "pass"),
            Err(Error::Authentication(_))
        ));
    }
}
