use crate::{Cli, CliError, CliResult, Commands, Outcome, logger};

use rg_auth::{ServiceAccountKey, ServiceAccountTokenSource};
use rg_config::{Config, GrantConfig, LogLevel};
use rg_core::{ClaimMode, ClaimSet};
use rg_identity::{
    IdentityService, IdentityToolkitClient, Result as IdentityErrorResult, RoleGrant,
};

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info};

/// Load config, initialise logging, authenticate and run the command
pub async fn run(cli: &Cli) -> CliResult<Outcome> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, cli);
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    // The credential must load before any claim request is attempted
    let client = connect(&config)?;

    let outcome = execute(&cli.command, &config.grant, &client).await?;
    Ok(outcome)
}

/// Command-line flags take precedence over the config file and environment
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.credentials {
        config.credentials.path = path.clone();
    }
    if let Some(project_id) = &cli.project_id {
        config.identity.project_id = Some(project_id.clone());
    }
    if let Some(tenant_id) = &cli.tenant_id {
        config.identity.tenant_id = Some(tenant_id.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = LogLevel::parse_lenient(level);
    }
}

/// Load the service-account key and build the identity client
pub fn connect(config: &Config) -> CliResult<IdentityToolkitClient> {
    let key_path = config.credentials.key_path();
    let key = ServiceAccountKey::from_file(&key_path).map_err(CliError::Credential)?;
    info!(
        "Loaded credential for {} from {}",
        key.client_email,
        key_path.display()
    );

    let project_id = config
        .identity
        .project_id
        .clone()
        .unwrap_or_else(|| key.project_id.clone());

    let tokens = Arc::new(ServiceAccountTokenSource::new(key));

    Ok(
        IdentityToolkitClient::new(&config.identity.api_base_url, &project_id, tokens)
            .with_tenant(config.identity.tenant_id.as_deref()),
    )
}

/// Run one command against the identity service
pub async fn execute(
    command: &Commands,
    grant: &GrantConfig,
    service: &dyn IdentityService,
) -> IdentityErrorResult<Outcome> {
    let role_grant = RoleGrant::new(service);

    match command {
        Commands::Grant {
            uid,
            role,
            claims,
            merge,
        } => {
            let role = role.clone().unwrap_or_else(|| grant.default_role.clone());
            let mode = if *merge { ClaimMode::Merge } else { grant.mode };

            // The role claim wins over a --claim with the same name
            let mut claim_set = ClaimSet::new();
            for (name, value) in claims {
                claim_set.insert(name.clone(), value.clone());
            }
            claim_set.insert(grant.claim_name.clone(), role.clone());

            debug!("Granting {} to {} ({})", claim_set, uid, mode);
            let receipt = role_grant.grant(uid, &claim_set, mode).await?;
            Ok(Outcome::Granted { receipt, role })
        }
        Commands::Revoke { uid } => {
            let receipt = role_grant.revoke(uid).await?;
            Ok(Outcome::Revoked { receipt })
        }
        Commands::Show { uid } => {
            let claims = role_grant.inspect(uid).await?;
            Ok(Outcome::Claims {
                uid: uid.clone(),
                claims,
            })
        }
    }
}
