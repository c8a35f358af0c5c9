use super::{header_map, validate_header, X_AUTH_REFRESH_TOKEN};
use crate::models::OperatorDeployResult;
use cloud_api_framework::{
    require_non_empty,
    reqwest::{header::HeaderMap, Method},
    serialize_body, serialize_query, Endpoint, Error,
};
use serde::Serialize;

const OPERATOR_PATH: &str = "/deploy/kubernetes/olm/operator";

/// Identifies the operators of a version deployed on a cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OperatorTarget {
    /// Cluster identification.
    pub cluster_id: String,
    /// Cluster region.
    pub region: String,
    /// A dotted value of `catalogID`.`versionID`.
    pub version_locator_id: String,
}

impl OperatorTarget {
    fn validate(&self) -> Result<(), Error> {
        require_non_empty("cluster_id", &self.cluster_id)?;
        require_non_empty("region", &self.region)?;
        require_non_empty("version_locator_id", &self.version_locator_id)
    }
}

/// Operator deployment settings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OperatorDeployBody {
    pub cluster_id: Option<String>,
    pub region: Option<String>,
    /// Kube namespaces to deploy Operator(s) to.
    pub namespaces: Option<Vec<String>>,
    /// Denotes whether to install Operator(s) globally.
    pub all_namespaces: Option<bool>,
    pub version_locator_id: Option<String>,
    /// Operator channel.
    pub channel: Option<String>,
    /// Plan.
    pub install_plan: Option<String>,
}

fn require_refresh_token(x_auth_refresh_token: &str) -> Result<(), Error> {
    require_non_empty("x_auth_refresh_token", x_auth_refresh_token)?;
    validate_header("x_auth_refresh_token", Some(x_auth_refresh_token))
}

pub use list_operators::ListOperators;
mod list_operators {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ListOperators {
        pub x_auth_refresh_token: String,
        pub target: OperatorTarget,
    }

    impl Endpoint for ListOperators {
        type Response = Vec<OperatorDeployResult>;

        fn method(&self) -> Method {
            Method::GET
        }

        fn path(&self) -> String {
            OPERATOR_PATH.to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.target)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_refresh_token(&self.x_auth_refresh_token)?;
            self.target.validate()
        }
    }
}

pub use create_operator::CreateOperator;
mod create_operator {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct CreateOperator {
        pub x_auth_refresh_token: String,
        pub body: OperatorDeployBody,
    }

    impl Endpoint for CreateOperator {
        type Response = Vec<OperatorDeployResult>;

        fn method(&self) -> Method {
            Method::POST
        }

        fn path(&self) -> String {
            OPERATOR_PATH.to_string()
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use replace_operator::ReplaceOperator;
mod replace_operator {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct ReplaceOperator {
        pub x_auth_refresh_token: String,
        pub body: OperatorDeployBody,
    }

    impl Endpoint for ReplaceOperator {
        type Response = Vec<OperatorDeployResult>;

        fn method(&self) -> Method {
            Method::PUT
        }

        fn path(&self) -> String {
            OPERATOR_PATH.to_string()
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn body(&self) -> Option<String> {
            serialize_body(&self.body)
        }

        fn validate(&self) -> Result<(), Error> {
            require_refresh_token(&self.x_auth_refresh_token)
        }
    }
}

pub use delete_operator::DeleteOperator;
mod delete_operator {
    use super::*;

    #[derive(Clone, Debug, Default)]
    pub struct DeleteOperator {
        pub x_auth_refresh_token: String,
        pub target: OperatorTarget,
    }

    impl Endpoint for DeleteOperator {
        type Response = ();

        fn method(&self) -> Method {
            Method::DELETE
        }

        fn path(&self) -> String {
            OPERATOR_PATH.to_string()
        }

        fn query(&self) -> Option<String> {
            serialize_query(&self.target)
        }

        fn headers(&self) -> Option<HeaderMap> {
            header_map([(X_AUTH_REFRESH_TOKEN, Some(self.x_auth_refresh_token.as_str()))])
        }

        fn validate(&self) -> Result<(), Error> {
            require_refresh_token(&self.x_auth_refresh_token)?;
            self.target.validate()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_operators_query_and_header() {
        let endpoint = ListOperators {
            x_auth_refresh_token: "refresh".to_string(),
            target: OperatorTarget {
                cluster_id: "cluster-1".to_string(),
                region: "us-south".to_string(),
                version_locator_id: "catalog.version".to_string(),
            },
        };
        assert!(endpoint.validate().is_ok());
        assert_eq!(
            endpoint.query().as_deref(),
            Some("cluster_id=cluster-1&region=us-south&version_locator_id=catalog.version")
        );
        assert_eq!(endpoint.headers().unwrap()[X_AUTH_REFRESH_TOKEN], "refresh");
    }

    #[test]
    fn delete_operator_requires_target() {
        let endpoint = DeleteOperator {
            x_auth_refresh_token: "refresh".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            endpoint.validate(),
            Err(Error::InvalidArgument { arg, .. }) if arg == "cluster_id"
        ));
    }
}
