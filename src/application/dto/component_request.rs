use serde::Deserialize;

/// ComponentRequest - one component query as received from a transport
///
/// `purl` may carry an inline version (`pkg:npm/lodash@4.17.21`) when no
/// requirement is given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ComponentRequest {
    pub purl: String,
    #[serde(default)]
    pub requirement: Option<String>,
}

impl ComponentRequest {
    pub fn new(purl: impl Into<String>, requirement: Option<String>) -> Self {
        Self {
            purl: purl.into(),
            requirement,
        }
    }
}

/// Batch input file shape: `{"components": [{"purl": "...", "requirement": "..."}]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentBatchRequest {
    pub components: Vec<ComponentRequest>,
}
