//! CLI command implementations

use anyhow::{bail, Result};
use chrono::Duration;
use std::fs;
use std::path::{Path, PathBuf};

use crate::auth::Payload;
use crate::cli::{error, info, print_payload, success, warn, TokenAction};
use crate::config::{self, loader::CONFIG_FILENAME, Config, TokenConfig};

/// Initialize a new simplebank.toml configuration file
pub async fn init() -> Result<()> {
    match write_default_config(Path::new("."))? {
        Some(path) => {
            success(&format!("Created {}", path.display()));
            info("Set SIMPLEBANK_TOKEN_SYMMETRIC_KEY and run 'simplebank serve'");
        }
        None => warn(&format!("{} already exists", CONFIG_FILENAME)),
    }
    Ok(())
}

/// Write the default config into `dir`. Returns `None` if one already exists.
pub fn write_default_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        return Ok(None);
    }

    fs::write(&config_path, config::loader::default_config_content())?;
    Ok(Some(config_path))
}

/// Start the API server
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = load_config()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    info(&format!(
        "Starting server at http://{}:{}",
        config.server.host, config.server.port
    ));

    crate::api::run_server(config).await?;
    Ok(())
}

/// Token management commands
pub async fn token(action: TokenAction) -> Result<()> {
    let config = load_config()?;
    run_token_action(&config, action).map(|_| ())
}

/// Run a token subcommand against `config`, returning the payload involved
pub fn run_token_action(config: &Config, action: TokenAction) -> Result<Payload> {
    config.validate()?;
    let maker = config.token.build_maker()?;

    match action {
        TokenAction::Issue {
            username,
            duration_secs,
            refresh,
        } => {
            let duration = issue_duration(&config.token, duration_secs, refresh)?;

            let (token, payload) = maker.create_token(&username, duration)?;
            success(&format!("Issued {} token for {}", config.token.kind, username));
            print_payload(&payload);
            println!();
            println!("{}", token);
            Ok(payload)
        }
        TokenAction::Verify { token } => match maker.verify_token(&token) {
            Ok(payload) => {
                success("Token is valid");
                print_payload(&payload);
                Ok(payload)
            }
            Err(e) => {
                error(&format!("Token rejected: {}", e));
                Err(e.into())
            }
        },
    }
}

/// Lifetime for `token issue`: explicit seconds, else refresh or access duration
pub fn issue_duration(
    token: &TokenConfig,
    duration_secs: Option<i64>,
    refresh: bool,
) -> Result<Duration> {
    match duration_secs {
        Some(secs) if secs <= 0 => bail!("--duration-secs must be positive, got {}", secs),
        Some(secs) => Ok(Duration::seconds(secs)),
        None if refresh => Ok(token.refresh_token_duration()),
        None => Ok(token.access_token_duration()),
    }
}

fn load_config() -> Result<Config> {
    config::load_config().map_err(|e| {
        error(&format!("Failed to load config: {}", e));
        e.into()
    })
}
