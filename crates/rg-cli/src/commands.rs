use rg_core::UserIdentity;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grant a role (plus optional extra claims) to a user
    Grant {
        /// User ID (uid) to grant the role to
        #[arg(value_parser = parse_uid)]
        uid: UserIdentity,

        /// Role to grant (defaults to grant.default_role, "admin")
        #[arg(long)]
        role: Option<String>,

        /// Additional string claim; may be repeated
        #[arg(long = "claim", value_name = "KEY=VALUE", value_parser = parse_claim)]
        claims: Vec<(String, String)>,

        /// Keep the user's other custom claims instead of replacing them
        #[arg(long)]
        merge: bool,
    },

    /// Remove all custom claims from a user
    Revoke {
        /// User ID (uid)
        #[arg(value_parser = parse_uid)]
        uid: UserIdentity,
    },

    /// Print a user's current custom claims as JSON
    Show {
        /// User ID (uid)
        #[arg(value_parser = parse_uid)]
        uid: UserIdentity,
    },
}

fn parse_uid(s: &str) -> Result<UserIdentity, String> {
    UserIdentity::new(s).map_err(|_| {
        format!(
            "uid must be a non-empty string with at most {} characters",
            rg_core::MAX_UID_LENGTH
        )
    })
}

fn parse_claim(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
