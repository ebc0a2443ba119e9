use crate::{CliError, CliResult, Outcome};

use rg_identity::IdentityError;

use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
/// Config, logger and other local failures
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CREDENTIAL: u8 = 3;
pub const EXIT_INVALID_IDENTITY: u8 = 4;
pub const EXIT_PERMISSION: u8 = 5;
pub const EXIT_TRANSPORT: u8 = 6;
/// The request was refused, locally or by the service
pub const EXIT_REJECTED: u8 = 7;

/// Exit status for a failed command
pub fn exit_status(err: &CliError) -> u8 {
    match err {
        CliError::Config(_) | CliError::Logger { .. } => EXIT_FAILURE,
        CliError::Credential(_) => EXIT_CREDENTIAL,
        CliError::Identity(identity) => match identity {
            IdentityError::Credential { .. } => EXIT_CREDENTIAL,
            IdentityError::InvalidIdentity { .. } => EXIT_INVALID_IDENTITY,
            IdentityError::Permission { .. } => EXIT_PERMISSION,
            IdentityError::Transport { .. } => EXIT_TRANSPORT,
            IdentityError::Rejected { .. }
            | IdentityError::Validation { .. }
            | IdentityError::Json { .. } => EXIT_REJECTED,
        },
    }
}

/// Print exactly one line for the result (stdout on success, stderr on failure)
/// and return the process exit status.
pub fn report(result: &CliResult<Outcome>, out: &mut dyn Write, err: &mut dyn Write) -> u8 {
    match result {
        Ok(outcome) => match writeln!(out, "{}", outcome.success_line()) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "Error writing output: {}", e);
                EXIT_FAILURE
            }
        },
        Err(e) => {
            let _ = writeln!(err, "Error: {}", single_line(&e.to_string()));
            exit_status(e)
        }
    }
}

fn single_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}
