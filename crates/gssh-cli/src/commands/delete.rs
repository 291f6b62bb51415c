//! `gssh delete`

use std::io::Write;

use tracing::debug;

use gssh_api::requests::DeleteInstanceRequest;
use gssh_api::GlobalParams;
use gssh_client::GlobalSshApi;

use super::{outcome, Tally};
use crate::cli::DeleteArgs;
use crate::error::CommandError;

/// Delete each id in order, one call per id
///
/// A failed id is reported and the remaining ids are still deleted. Ids are
/// neither sorted nor deduplicated.
///
/// # Errors
/// Returns [`CommandError::Batch`] if any deletion failed, or an output error.
pub async fn run<A, W>(
    args: &DeleteArgs,
    api: &A,
    params: &GlobalParams,
    out: &mut W,
) -> Result<(), CommandError>
where
    A: GlobalSshApi + ?Sized,
    W: Write,
{
    let mut tally = Tally::default();

    for id in &args.ids {
        let mut request = DeleteInstanceRequest::new(id);
        params.bind(&mut request);
        debug!(instance_id = %id, "deleting instance");

        let result = outcome(api.delete_instance(&request).await).map(|_| ());
        tally.record(
            out,
            result,
            format_args!("GlobalSSH({id}) was successfully deleted"),
        )?;
    }

    tally.finish()
}
