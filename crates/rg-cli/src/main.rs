//! grant-role - grant authorization roles through identity-platform custom claims
//!
//! # Examples
//!
//! ```bash
//! # Make a user an admin (custom claims become {"role":"admin"})
//! grant-role grant hCVUcfYV6jTiM4cu8VdcNuB6Aaz2
//!
//! # Grant another role, keeping the user's other claims
//! grant-role grant <uid> --role editor --merge
//!
//! # Inspect and clear claims
//! grant-role show <uid>
//! grant-role revoke <uid>
//! ```

use rg_cli::{Cli, report, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(&cli).await;

    let status = report(
        &result,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );

    ExitCode::from(status)
}
