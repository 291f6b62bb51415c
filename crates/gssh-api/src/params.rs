//! Ambient account context bound into every request

use serde::{Deserialize, Serialize};

use crate::requests::ApiRequest;

/// Region and project scoping attached to outgoing requests
///
/// Built once from configuration and handed to each command by reference;
/// commands never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl GlobalParams {
    #[must_use]
    pub fn new(region: Option<String>, project_id: Option<String>) -> Self {
        Self { region, project_id }
    }

    /// Copy this context onto a request just before it is dispatched
    pub fn bind<R: ApiRequest>(&self, request: &mut R) {
        *request.global_mut() = self.clone();
    }
}
