//! Configuration for the EOSB & compliance engine.
//!
//! This module loads the compliance rule repository from YAML files and
//! defines the server's command-line/environment configuration.
//!
//! # Example
//!
//! ```no_run
//! use eosb_engine::config::RuleRepository;
//!
//! let repository = RuleRepository::load("./config/labor_code").unwrap();
//! println!("Loaded rules: {} {}", repository.metadata().name, repository.version());
//! ```

mod loader;
mod server;
mod types;

pub use loader::RuleRepository;
pub use server::ServerConfig;
pub use types::{Citation, RepositoryMetadata, RuleCondition, RuleDefinition, RulesFile, Severity};
