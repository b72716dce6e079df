//! Credentials loading for the kith demo.
//!
//! Neo4j Aura instances ship a key-value credentials file
//! (`NEO4J_URI=...`, one key per line). The file is required at
//! startup; environment variables of the same names override it.

use std::path::Path;

use crate::error::{CliError, Result};

/// Connection credentials for the target database. Loaded once,
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub uri: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl Credentials {
    /// Load credentials from the given env-style file.
    ///
    /// Fails before any connection attempt if the file is missing,
    /// unreadable, or any of the four required keys is absent.
    pub fn load(path: &Path) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Ini))
            .add_source(config::Environment::default())
            .build()
            .map_err(|e| CliError::Config(format!("cannot load {}: {e}", path.display())))?;

        Ok(Self {
            uri: require(&cfg, "neo4j_uri")?,
            username: require(&cfg, "neo4j_username")?,
            password: require(&cfg, "neo4j_password")?,
            database: require(&cfg, "neo4j_database")?,
        })
    }
}

fn require(cfg: &config::Config, key: &str) -> Result<String> {
    cfg.get_string(key)
        .map_err(|_| CliError::Config(format!("missing required key {}", key.to_uppercase())))
}
