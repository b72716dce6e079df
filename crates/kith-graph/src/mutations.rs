//! Write operations for the demo graph.
//!
//! All mutations use MERGE (upsert) or DETACH DELETE semantics so the
//! demo can be re-run without drifting state. Change counters are
//! computed inside the Cypher statement itself; neo4rs does not
//! surface the Bolt result summary the way the official drivers do.

use std::time::{Duration, Instant};

use chrono::Utc;
use neo4rs::query;

use crate::client::{GraphClient, GraphError};

/// Outcome of a detach-delete over a set of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSummary {
    pub nodes_deleted: i64,
    pub elapsed: Duration,
}

/// Outcome of merging two people and the KNOWS edge between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub nodes_created: i64,
    pub relationships_created: i64,
    pub elapsed: Duration,
}

impl GraphClient {
    /// Detach-delete every Person whose name is in `names`.
    ///
    /// DETACH removes incident relationships first; a node with live
    /// relationships cannot be deleted. Returns how many nodes were
    /// removed, zero on a repeat call with the same set.
    pub async fn delete_people(&self, names: &[String]) -> Result<DeleteSummary, GraphError> {
        let q = query(
            "MATCH (p:Person)
             WHERE p.name IN $names
             DETACH DELETE p
             RETURN count(p) AS deleted",
        )
        .param("names", names.to_vec());

        let started = Instant::now();
        let row = self.query_one(q).await?;
        let elapsed = started.elapsed();

        let nodes_deleted = match row {
            Some(row) => row
                .get::<i64>("deleted")
                .map_err(|e| GraphError::Malformed(format!("deleted column: {e}")))?,
            None => 0,
        };

        tracing::debug!(nodes_deleted, "Detach-delete finished");
        Ok(DeleteSummary {
            nodes_deleted,
            elapsed,
        })
    }

    /// Ensure Person nodes exist for `name` and `friend`, plus a
    /// directed KNOWS relationship from the first to the second.
    ///
    /// MERGE makes the whole statement idempotent: a second call with
    /// the same pair creates nothing and reports zero counts. Created
    /// counts come from ON CREATE markers that are removed before the
    /// row is returned, so no marker survives in the graph. Equal
    /// names bind both patterns to one node, counted once.
    pub async fn merge_acquaintance(
        &self,
        name: &str,
        friend: &str,
    ) -> Result<MergeSummary, GraphError> {
        let q = query(
            "MERGE (a:Person {name: $name})
             ON CREATE SET a.created_at = $now, a._fresh = true
             MERGE (b:Person {name: $friend})
             ON CREATE SET b.created_at = $now, b._fresh = true
             MERGE (a)-[r:KNOWS]->(b)
             ON CREATE SET r.created_at = $now, r._fresh = true
             WITH a, b, r,
                  size([n IN (CASE WHEN a = b THEN [a] ELSE [a, b] END)
                        WHERE n._fresh]) AS nodes_created,
                  (CASE WHEN r._fresh THEN 1 ELSE 0 END) AS rels_created
             REMOVE a._fresh, b._fresh, r._fresh
             RETURN nodes_created, rels_created",
        )
        .param("name", name.to_string())
        .param("friend", friend.to_string())
        .param("now", Utc::now().to_rfc3339());

        let started = Instant::now();
        let row = self.query_one(q).await?;
        let elapsed = started.elapsed();

        let row = row.ok_or_else(|| {
            GraphError::Malformed("merge returned no summary row".to_string())
        })?;
        let nodes_created = row
            .get::<i64>("nodes_created")
            .map_err(|e| GraphError::Malformed(format!("nodes_created column: {e}")))?;
        let relationships_created = row
            .get::<i64>("rels_created")
            .map_err(|e| GraphError::Malformed(format!("rels_created column: {e}")))?;

        tracing::debug!(nodes_created, relationships_created, "Merge finished");
        Ok(MergeSummary {
            nodes_created,
            relationships_created,
            elapsed,
        })
    }
}
