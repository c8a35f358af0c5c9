use serde::{Deserialize, Serialize};

/// Operator deploy result.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorDeployResult {
    pub phase: Option<String>,
    pub message: Option<String>,
    pub link: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub namespace: Option<String>,
    pub package_name: Option<String>,
    pub catalog_id: Option<String>,
}
