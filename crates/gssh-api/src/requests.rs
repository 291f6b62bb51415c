//! Request types for the API

use serde::Serialize;

use crate::area::Area;
use crate::params::GlobalParams;
use crate::port::SshPort;

/// A request that can be dispatched to the GlobalSSH API
pub trait ApiRequest: Serialize {
    /// Value of the `Action` parameter
    const ACTION: &'static str;

    /// Context slot filled by [`GlobalParams::bind`]
    fn global_mut(&mut self) -> &mut GlobalParams;
}

macro_rules! impl_api_request {
    ($ty:ty, $action:literal) => {
        impl ApiRequest for $ty {
            const ACTION: &'static str = $action;

            fn global_mut(&mut self) -> &mut GlobalParams {
                &mut self.global
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescribeInstancesRequest {
    #[serde(flatten)]
    pub global: GlobalParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceRequest {
    #[serde(flatten)]
    pub global: GlobalParams,
    /// Location code, not the command-line name
    pub area: String,
    #[serde(rename = "TargetIP")]
    pub target_ip: String,
    pub port: SshPort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<String>,
}

impl CreateInstanceRequest {
    pub fn new(area: Area, target_ip: impl Into<String>, port: SshPort) -> Self {
        Self {
            global: GlobalParams::default(),
            area: area.location_code().to_string(),
            target_ip: target_ip.into(),
            port,
            remark: None,
            coupon_id: None,
        }
    }

    #[must_use]
    pub fn with_remark(mut self, remark: Option<String>) -> Self {
        self.remark = remark;
        self
    }

    #[must_use]
    pub fn with_coupon_id(mut self, coupon_id: Option<String>) -> Self {
        self.coupon_id = coupon_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInstanceRequest {
    #[serde(flatten)]
    pub global: GlobalParams,
    pub instance_id: String,
}

impl DeleteInstanceRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            global: GlobalParams::default(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyPortRequest {
    #[serde(flatten)]
    pub global: GlobalParams,
    pub instance_id: String,
    pub port: SshPort,
}

impl ModifyPortRequest {
    pub fn new(instance_id: impl Into<String>, port: SshPort) -> Self {
        Self {
            global: GlobalParams::default(),
            instance_id: instance_id.into(),
            port,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyRemarkRequest {
    #[serde(flatten)]
    pub global: GlobalParams,
    pub instance_id: String,
    pub remark: String,
}

impl ModifyRemarkRequest {
    pub fn new(instance_id: impl Into<String>, remark: impl Into<String>) -> Self {
        Self {
            global: GlobalParams::default(),
            instance_id: instance_id.into(),
            remark: remark.into(),
        }
    }
}

impl_api_request!(DescribeInstancesRequest, "DescribeGlobalSSHInstance");
impl_api_request!(CreateInstanceRequest, "CreateGlobalSSHInstance");
impl_api_request!(DeleteInstanceRequest, "DeleteGlobalSSHInstance");
impl_api_request!(ModifyPortRequest, "ModifyGlobalSSHPort");
impl_api_request!(ModifyRemarkRequest, "ModifyGlobalSSHRemark");
