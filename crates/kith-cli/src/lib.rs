//! kith-cli: the runnable walkthrough for the kith demo graph.
//!
//! Loads Neo4j credentials from an env-style file, verifies the
//! endpoint is reachable, then runs a fixed delete / merge / read
//! sequence and prints each operation's summary.

pub mod config;
pub mod error;
pub mod runner;

pub use error::CliError;
