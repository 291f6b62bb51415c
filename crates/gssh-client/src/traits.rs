//! API client trait

use async_trait::async_trait;

use gssh_api::requests::{
    CreateInstanceRequest, DeleteInstanceRequest, DescribeInstancesRequest, ModifyPortRequest,
    ModifyRemarkRequest,
};
use gssh_api::responses::{CreateInstanceResponse, DescribeInstancesResponse, StatusResponse};

use crate::error::Result;

/// One call per GlobalSSH operation
///
/// An `Ok` response may still carry a non-zero `RetCode`; only transport
/// failures are reported through `Err`.
#[async_trait]
pub trait GlobalSshApi: Send + Sync {
    async fn describe_instances(
        &self,
        request: &DescribeInstancesRequest,
    ) -> Result<DescribeInstancesResponse>;

    async fn create_instance(&self, request: &CreateInstanceRequest)
        -> Result<CreateInstanceResponse>;

    async fn delete_instance(&self, request: &DeleteInstanceRequest) -> Result<StatusResponse>;

    async fn modify_port(&self, request: &ModifyPortRequest) -> Result<StatusResponse>;

    async fn modify_remark(&self, request: &ModifyRemarkRequest) -> Result<StatusResponse>;
}
