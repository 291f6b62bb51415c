//! `gssh modify`

use std::io::Write;

use tracing::debug;

use gssh_api::requests::{ModifyPortRequest, ModifyRemarkRequest};
use gssh_api::{GlobalParams, SshPort, ValidationError};
use gssh_client::GlobalSshApi;

use super::{non_empty, outcome, Tally};
use crate::cli::ModifyArgs;
use crate::error::CommandError;

const MODIFIED: &str = "Successfully modified";

/// Change the port and/or remark of one instance
///
/// The port change is sent first, then the remark change, both against the
/// same instance id. The two calls are independent: one may fail while the
/// other succeeds.
///
/// # Errors
/// Returns a validation error (nothing to change, bad port) before any call
/// is made, [`CommandError::Batch`] if a call failed, or an output error.
pub async fn run<A, W>(
    args: &ModifyArgs,
    api: &A,
    params: &GlobalParams,
    out: &mut W,
) -> Result<(), CommandError>
where
    A: GlobalSshApi + ?Sized,
    W: Write,
{
    let port = non_empty(args.port.as_deref());
    let remark = non_empty(args.remark.as_deref());
    if port.is_none() && remark.is_none() {
        return Err(ValidationError::NothingToModify.into());
    }
    let port = port.as_deref().map(SshPort::parse).transpose()?;

    let instance_id = args.id.as_str();
    let mut tally = Tally::default();

    if let Some(port) = port {
        let mut request = ModifyPortRequest::new(instance_id, port);
        params.bind(&mut request);
        debug!(%instance_id, %port, "modifying port");

        let result = outcome(api.modify_port(&request).await).map(|_| ());
        tally.record(out, result, MODIFIED)?;
    }

    if let Some(remark) = remark {
        let mut request = ModifyRemarkRequest::new(instance_id, remark);
        params.bind(&mut request);
        debug!(%instance_id, "modifying remark");

        let result = outcome(api.modify_remark(&request).await).map(|_| ());
        tally.record(out, result, MODIFIED)?;
    }

    tally.finish()
}
