use chrono::Duration;
use clap::Args;
use serde_json::json;

use crate::auth::{SessionKeys, SessionUser};
use crate::cli::{utils, OutputFormat};
use crate::config;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(long, help = "User name carried in the session")]
    pub name: String,

    #[arg(long, help = "Avatar image URL")]
    pub image: Option<String>,

    #[arg(long, help = "Lifetime in hours (defaults to SECURITY_SESSION_TTL_HOURS)")]
    pub hours: Option<i64>,
}

pub async fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    if security.session_secret.is_empty() {
        anyhow::bail!("SECURITY_SESSION_SECRET is not set");
    }

    let keys = match args.hours {
        Some(hours) if hours > 0 => SessionKeys::new(&security.session_secret, Duration::hours(hours))?,
        Some(hours) => anyhow::bail!("invalid token lifetime: {} hours", hours),
        None => SessionKeys::from_config(security)?,
    };

    let user = SessionUser {
        name: args.name,
        image: args.image,
    };
    let token = keys.issue(&user)?;

    match output_format {
        OutputFormat::Json => utils::output_success(
            &output_format,
            "Session token issued",
            Some(json!({
                "token": token,
                "user": user,
                "expires_in": keys.ttl().num_seconds(),
            })),
        ),
        // Bare token so `export SHOPVAULT_TOKEN=$(vault token --name admin)` works
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
