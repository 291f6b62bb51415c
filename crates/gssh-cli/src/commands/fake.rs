//! Recording stand-in for the API client

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use gssh_api::requests::{
    CreateInstanceRequest, DeleteInstanceRequest, DescribeInstancesRequest, ModifyPortRequest,
    ModifyRemarkRequest,
};
use gssh_api::responses::{
    CreateInstanceResponse, DescribeInstancesResponse, Instance, ResponseStatus, StatusResponse,
};
use gssh_client::{ClientError, GlobalSshApi, Result};

/// A request the fake received, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Describe(DescribeInstancesRequest),
    Create(CreateInstanceRequest),
    Delete(DeleteInstanceRequest),
    ModifyPort(ModifyPortRequest),
    ModifyRemark(ModifyRemarkRequest),
}

/// How the fake answers the next call
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Ok,
    Service(i32, &'static str),
    Transport,
}

pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<VecDeque<Reply>>,
    instances: Vec<Instance>,
    new_instance_id: String,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(VecDeque::new()),
            instances: Vec::new(),
            new_instance_id: "uga-new".to_string(),
        }
    }

    /// Queue a reply; calls beyond the queue succeed
    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<ResponseStatus> {
        self.calls.lock().unwrap().push(call);
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Reply::Ok);
        match reply {
            Reply::Ok => Ok(ResponseStatus::default()),
            Reply::Service(code, message) => Ok(ResponseStatus {
                ret_code: code,
                message: message.to_string(),
                action: String::new(),
            }),
            Reply::Transport => Err(ClientError::Timeout),
        }
    }
}

#[async_trait]
impl GlobalSshApi for FakeApi {
    async fn describe_instances(
        &self,
        request: &DescribeInstancesRequest,
    ) -> Result<DescribeInstancesResponse> {
        let status = self.answer(Call::Describe(request.clone()))?;
        let instance_set = if status.is_success() {
            self.instances.clone()
        } else {
            Vec::new()
        };
        Ok(DescribeInstancesResponse {
            status,
            instance_set,
        })
    }

    async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> Result<CreateInstanceResponse> {
        let status = self.answer(Call::Create(request.clone()))?;
        let instance_id = if status.is_success() {
            self.new_instance_id.clone()
        } else {
            String::new()
        };
        Ok(CreateInstanceResponse {
            status,
            instance_id,
        })
    }

    async fn delete_instance(&self, request: &DeleteInstanceRequest) -> Result<StatusResponse> {
        let status = self.answer(Call::Delete(request.clone()))?;
        Ok(StatusResponse { status })
    }

    async fn modify_port(&self, request: &ModifyPortRequest) -> Result<StatusResponse> {
        let status = self.answer(Call::ModifyPort(request.clone()))?;
        Ok(StatusResponse { status })
    }

    async fn modify_remark(&self, request: &ModifyRemarkRequest) -> Result<StatusResponse> {
        let status = self.answer(Call::ModifyRemark(request.clone()))?;
        Ok(StatusResponse { status })
    }
}
