//! kith-graph: Neo4j client for the kith demo graph.
//!
//! All Cypher lives in this crate. Mutations use MERGE and DETACH
//! DELETE with named-parameter binding; reads come back as
//! lightweight records plus a summary of the run.

pub mod client;
pub mod mutations;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use mutations::{DeleteSummary, MergeSummary};
pub use queries::{PersonRecord, ReadSummary};
