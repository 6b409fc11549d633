//! Server configuration.
//!
//! Settings are read from command-line flags, falling back to environment
//! variables and then to defaults.

use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration for `eosb-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "eosb-server", version, about = "EOSB & labor-law compliance API")]
pub struct ServerConfig {
    /// Directory containing `repository.yaml` and `rules/`. Uses the
    /// compiled-in rule set when omitted.
    #[arg(long, env = "EOSB_RULES_PATH")]
    pub rules_path: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "EOSB_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: String,

    /// Enable debug logging for the engine.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_builtin_rules() {
        let config = ServerConfig::try_parse_from(["eosb-server"]).unwrap();
        assert_eq!(config.bind, "0.0.0.0:3000");
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "eosb-server",
            "--rules-path",
            "./config/labor_code",
            "--bind",
            "127.0.0.1:8080",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.rules_path, Some(PathBuf::from("./config/labor_code")));
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert!(config.verbose);
    }
}
