//! Command dispatcher
//!
//! Each command validates its own input, binds the global parameters onto
//! its request(s), calls the API and writes the outcome to `out`. Commands
//! are independent of each other.

use std::fmt::Display;
use std::io::Write;

use tracing::warn;

use gssh_api::responses::ApiResponse;
use gssh_api::GlobalParams;
use gssh_client::{ClientError, GlobalSshApi};

use crate::cli::Commands;
use crate::error::CommandError;

pub mod create;
pub mod delete;
pub mod list;
pub mod modify;

#[cfg(test)]
pub(crate) mod fake;

/// Run one command, writing every outcome to `out`
///
/// # Errors
/// Returns the failure that decides the exit code. It has already been
/// written to `out` by the time this returns.
pub async fn run<A, W>(
    command: Commands,
    api: &A,
    params: &GlobalParams,
    out: &mut W,
) -> Result<(), CommandError>
where
    A: GlobalSshApi + ?Sized,
    W: Write,
{
    let result = match command {
        Commands::List => list::run(api, params, out).await,
        Commands::Create(args) => create::run(&args, api, params, out).await,
        Commands::Delete(args) => delete::run(&args, api, params, out).await,
        Commands::Modify(args) => modify::run(&args, api, params, out).await,
    };

    if let Err(err) = &result {
        if !err.is_reported() {
            writeln!(out, "{err}")?;
        }
    }
    result
}

/// Turn a client result into a command result, treating a non-zero
/// `RetCode` as a failure
fn outcome<R: ApiResponse>(result: Result<R, ClientError>) -> Result<R, CommandError> {
    let response = result?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(
        ret_code = status.ret_code,
        message = %status.message,
        "service rejected request"
    );
    Err(CommandError::Service {
        code: status.ret_code,
        message: status.message.clone(),
    })
}

/// Empty flag values count as absent
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Outcomes of a command that issues several independent calls
#[derive(Debug, Default)]
struct Tally {
    total: usize,
    failures: Vec<CommandError>,
}

impl Tally {
    /// Report one call's outcome and keep going
    fn record<W: Write>(
        &mut self,
        out: &mut W,
        result: Result<(), CommandError>,
        success: impl Display,
    ) -> Result<(), CommandError> {
        self.total += 1;
        match result {
            Ok(()) => writeln!(out, "{success}")?,
            Err(err) => {
                writeln!(out, "{err}")?;
                self.failures.push(err);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<(), CommandError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(CommandError::Batch {
                failures: self.failures,
                total: self.total,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use gssh_api::ValidationError;

    use super::fake::{FakeApi, Reply};
    use super::*;
    use crate::cli::{CreateArgs, DeleteArgs, ModifyArgs};
    use crate::error::{EXIT_PARTIAL, EXIT_SERVICE, EXIT_TRANSPORT, EXIT_VALIDATION};

    async fn dispatch(api: &FakeApi, command: Commands) -> (Result<(), CommandError>, String) {
        let mut out = Vec::new();
        let result = run(command, api, &GlobalParams::default(), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_transport_failure_is_printed() {
        let api = FakeApi::new().reply(Reply::Transport);

        let (result, out) = dispatch(&api, Commands::List).await;

        assert_eq!(result.unwrap_err().exit_code(), EXIT_TRANSPORT);
        assert_eq!(out, "Error: Request timed out\n");
    }

    #[tokio::test]
    async fn test_service_failure_is_printed() {
        let api = FakeApi::new().reply(Reply::Service(171, "Signature VerifyAC Error"));

        let (result, out) = dispatch(&api, Commands::List).await;

        assert_eq!(result.unwrap_err().exit_code(), EXIT_SERVICE);
        assert_eq!(
            out,
            "Something wrong. RetCode:171, Message:Signature VerifyAC Error\n"
        );
    }

    #[tokio::test]
    async fn test_validation_failure_is_printed() {
        let api = FakeApi::new();
        let command = Commands::Create(CreateArgs {
            area: "Mars".into(),
            target_ip: "1.1.1.1".into(),
            port: "22".into(),
            remark: None,
            coupon_id: None,
        });

        let (result, out) = dispatch(&api, command).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation(ValidationError::UnknownArea(_))
        ));
        assert_eq!(err.exit_code(), EXIT_VALIDATION);
        assert_eq!(
            out,
            "Area should be one of LosAngeles,Singapore,HongKong,Tokyo,Washington,Frankfurt.\n"
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_batch_failures_are_printed_once() {
        let api = FakeApi::new()
            .reply(Reply::Service(8039, "not found"))
            .reply(Reply::Ok);
        let command = Commands::Delete(DeleteArgs {
            ids: vec!["uga-a".into(), "uga-b".into()],
        });

        let (result, out) = dispatch(&api, command).await;

        assert_eq!(result.unwrap_err().exit_code(), EXIT_PARTIAL);
        assert_eq!(
            out,
            "Something wrong. RetCode:8039, Message:not found\n\
             GlobalSSH(uga-b) was successfully deleted\n"
        );
    }

    #[tokio::test]
    async fn test_modify_success_exits_cleanly() {
        let api = FakeApi::new();
        let command = Commands::Modify(ModifyArgs {
            id: "uga-1".into(),
            port: Some("2222".into()),
            remark: None,
        });

        let (result, out) = dispatch(&api, command).await;

        assert!(result.is_ok());
        assert_eq!(out, "Successfully modified\n");
    }
}
