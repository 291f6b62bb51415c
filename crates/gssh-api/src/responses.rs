//! Response types for the API

use serde::{Deserialize, Serialize};

/// Status block present on every response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    pub ret_code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub action: String,
}

impl ResponseStatus {
    /// A zero `RetCode` means the service accepted the call
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.ret_code == 0
    }
}

/// Access to the status block of any response
pub trait ApiResponse {
    fn status(&self) -> &ResponseStatus;
}

/// One GlobalSSH instance as reported by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Instance {
    pub instance_id: String,
    pub accelerating_domain: String,
    #[serde(rename = "TargetIP")]
    pub target_ip: String,
    pub port: u32,
    pub remark: String,
    pub area: String,
    pub instance_type: String,
    pub charge_type: String,
    pub create_time: i64,
    pub expire_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub instance_set: Vec<Instance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub instance_id: String,
}

/// Response for calls that return nothing beyond their status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
}

impl ApiResponse for DescribeInstancesResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}

impl ApiResponse for CreateInstanceResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}

impl ApiResponse for StatusResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}
