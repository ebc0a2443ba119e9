use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "grant-role")]
#[command(about = "Grant authorization roles to users via identity-platform custom claims")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service-account key file (overrides config and GOOGLE_APPLICATION_CREDENTIALS)
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials: Option<String>,

    /// Project owning the users (defaults to the key file's project)
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Tenant of a multi-tenant project
    #[arg(long, global = true)]
    pub tenant_id: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}
