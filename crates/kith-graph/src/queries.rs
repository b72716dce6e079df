//! Read operations for the demo graph.

use std::time::{Duration, Instant};

use neo4rs::query;

use crate::client::{GraphClient, GraphError};

/// One row of a people query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersonRecord {
    pub name: String,
}

/// Result of a read query: the records plus the echoed query text.
#[derive(Debug, Clone)]
pub struct ReadSummary {
    pub records: Vec<PersonRecord>,
    pub query: String,
    pub elapsed: Duration,
}

const PEOPLE_WHO_KNOW: &str =
    "MATCH (p:Person)-[:KNOWS]->(:Person) RETURN p.name AS name";

impl GraphClient {
    /// Every Person with at least one outgoing KNOWS relationship to
    /// another Person. A person on the receiving end only does not
    /// appear. Order is whatever the database returns.
    pub async fn people_who_know(&self) -> Result<ReadSummary, GraphError> {
        let started = Instant::now();
        let rows = self.query_rows(query(PEOPLE_WHO_KNOW)).await?;
        let elapsed = started.elapsed();

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let name: String = row
                .get("name")
                .map_err(|e| GraphError::Malformed(format!("name column: {e}")))?;
            records.push(PersonRecord { name });
        }

        Ok(ReadSummary {
            records,
            query: PEOPLE_WHO_KNOW.to_string(),
            elapsed,
        })
    }
}
