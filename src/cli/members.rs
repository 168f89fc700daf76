use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::api::{SlackClient, SlackError};
use crate::config::Config;
use crate::credentials::{self, ApiKey, KeyLoad};

use super::output::{write_channels, write_members};
use super::{Cli, OutputFormat};

/// Fold command-line overrides into the loaded configuration
pub fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(path) = &cli.key_file {
        config.auth.key_file = path.display().to_string();
    }
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
}

fn resolve_format(cli: &Cli, config: &Config) -> OutputFormat {
    cli.format.unwrap_or_else(|| {
        OutputFormat::from_config(&config.output.default_format).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown output.default_format '{}', using csv",
                config.output.default_format
            );
            OutputFormat::Csv
        })
    })
}

/// Read the API token, logging at most one warning
pub fn load_api_key(config: &Config) -> Result<Option<ApiKey>> {
    let path = config.key_file_path()?;
    match credentials::load_key(&path) {
        KeyLoad::Present(key) => {
            tracing::debug!("Loaded API key from {}", path.display());
            Ok(Some(key))
        }
        KeyLoad::Absent => {
            tracing::debug!("No API key at {}", path.display());
            Ok(None)
        }
        KeyLoad::Warning(reason) => {
            tracing::warn!("{}", reason);
            Ok(None)
        }
    }
}

fn with_auth_hint(err: SlackError, config: &Config) -> anyhow::Error {
    if err.is_auth() {
        let hint = format!("Check the API token in {}", config.auth.key_file);
        anyhow::Error::new(err).context(hint)
    } else {
        err.into()
    }
}

pub async fn execute(cli: Cli, config: &Config) -> Result<()> {
    if let Some(channel_id) = &cli.channel_id {
        tracing::debug!(
            "Channel {} ignored; exporting every workspace member",
            channel_id
        );
    }

    let format = resolve_format(&cli, config);
    let token = load_api_key(config)?;
    let client = SlackClient::new(config, token)?;
    if !client.is_authenticated() {
        tracing::debug!("No API key; request will be sent unauthenticated");
    }

    if cli.list_channels {
        let channels = client
            .list_channels()
            .await
            .map_err(|e| with_auth_hint(e, config))
            .context("Failed to list channels")?;

        let mut out = io::stdout().lock();
        write_channels(&mut out, &channels, format)?;
        out.flush()?;
    } else {
        let members = client
            .list_users()
            .await
            .map_err(|e| with_auth_hint(e, config))
            .context("Failed to list users")?;
        tracing::debug!("Fetched {} members", members.len());

        let mut out = io::stdout().lock();
        write_members(&mut out, &members, format)?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::parse_from([
            "slack-members",
            "--key-file",
            "/tmp/other.key",
            "--api-url",
            "http://127.0.0.1:9/api",
        ]);
        let mut config = Config::default();
        apply_overrides(&cli, &mut config);

        assert_eq!(config.auth.key_file, "/tmp/other.key");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9/api");
    }

    #[test]
    fn format_falls_back_to_config_then_csv() {
        let cli = Cli::parse_from(["slack-members"]);
        let mut config = Config::default();
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Csv);

        config.output.default_format = "table".to_string();
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Table);

        config.output.default_format = "yaml".to_string();
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Csv);

        let cli = Cli::parse_from(["slack-members", "--format", "json"]);
        assert_eq!(resolve_format(&cli, &config), OutputFormat::Json);
    }

    #[test]
    fn load_api_key_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  xoxb-123  ").unwrap();

        let mut config = Config::default();
        config.auth.key_file = file.path().display().to_string();

        let key = load_api_key(&config).unwrap();
        assert_eq!(key, Some(ApiKey::new("xoxb-123")));
    }

    #[test]
    fn load_api_key_tolerates_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.auth.key_file = dir.path().display().to_string();

        assert_eq!(load_api_key(&config).unwrap(), None);
    }
}
