//! `gssh create`

use std::io::Write;

use tracing::{debug, info};

use gssh_api::requests::CreateInstanceRequest;
use gssh_api::{Area, GlobalParams, SshPort};
use gssh_client::GlobalSshApi;

use super::{non_empty, outcome};
use crate::cli::CreateArgs;
use crate::error::CommandError;

/// Validate the arguments and provision a new instance
///
/// Port is checked before area, and nothing is sent unless both pass.
/// Each successful call creates a new billable instance.
///
/// # Errors
/// Returns a validation, transport, service or output error.
pub async fn run<A, W>(
    args: &CreateArgs,
    api: &A,
    params: &GlobalParams,
    out: &mut W,
) -> Result<(), CommandError>
where
    A: GlobalSshApi + ?Sized,
    W: Write,
{
    let port = SshPort::parse(&args.port)?;
    let area: Area = args.area.parse()?;

    let mut request = CreateInstanceRequest::new(area, &args.target_ip, port)
        .with_remark(non_empty(args.remark.as_deref()))
        .with_coupon_id(non_empty(args.coupon_id.as_deref()));
    params.bind(&mut request);
    debug!(%area, target_ip = %args.target_ip, %port, "creating instance");

    let response = outcome(api.create_instance(&request).await)?;
    info!(instance_id = %response.instance_id, "instance created");
    writeln!(out, "Succeed, GlobalSSHInstanceId: {}", response.instance_id)?;
    Ok(())
}
