use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cast-client")]
#[command(about = "Query the actresses and actors API")]
pub struct CliConfig {
    /// API root; overrides the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout; overrides the config file
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Look up actresses
    Actress {
        #[command(subcommand)]
        lookup: Lookup,
    },
    /// Look up actors
    Actor {
        #[command(subcommand)]
        lookup: Lookup,
    },
    /// Pick a random actress and a random actor
    Couple,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Lookup {
    /// Fetch one record by id
    Get { id: u64 },
    /// Fetch the whole collection
    List,
    /// Fetch several records by id, e.g. `many 1,2,3`
    Many {
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<u64>,
    },
}

/// Settings after layering defaults, the optional file, then flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: ClientSettings,
    pub verbose: bool,
    pub log_json: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let mut settings = file
            .as_ref()
            .map(TomlConfig::to_settings)
            .unwrap_or_default();

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }

        settings.validate()?;

        Ok(ResolvedConfig {
            settings,
            verbose: self.verbose || file.as_ref().is_some_and(TomlConfig::verbose),
            log_json: self.log_json || file.as_ref().is_some_and(TomlConfig::json_logs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::parse_from(["cast-client", "actress", "many", "1,2,3"]);
        match cli.command {
            Command::Actress {
                lookup: Lookup::Many { ids },
            } => assert_eq!(ids, vec![1, 2, 3]),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = CliConfig::parse_from(["cast-client", "--verbose", "actor", "get", "7"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Actor {
                lookup: Lookup::Get { id: 7 }
            }
        ));
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = CliConfig::parse_from(["cast-client", "couple"]);
        let resolved = cli.resolve().unwrap();
        assert_eq!(resolved.settings.base_url, DEFAULT_BASE_URL);
        assert!(!resolved.verbose);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[api]\nbase_url = \"http://file.example.com\"\ntimeout_seconds = 20\n\n[logging]\njson = true\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "cast-client",
            "--config",
            path.as_str(),
            "--base-url",
            "http://flag.example.com",
            "actor",
            "list",
        ]);
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.settings.base_url, "http://flag.example.com");
        assert_eq!(resolved.settings.timeout_seconds, 20);
        assert!(resolved.log_json);
    }

    #[test]
    fn test_invalid_flag_fails_resolution() {
        let cli = CliConfig::parse_from(["cast-client", "--timeout-seconds", "0", "couple"]);
        assert!(cli.resolve().is_err());
    }
}
