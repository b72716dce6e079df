//! The fixed demo sequence: delete by set, merge, read back.
//!
//! Straight-line execution with no retry and no rollback; the first
//! failure propagates and ends the process with the error visible.

use kith_graph::{DeleteSummary, GraphClient, MergeSummary, ReadSummary};

use crate::error::Result;

/// Names driving one demo run.
#[derive(Debug, Clone)]
pub struct DemoPlan {
    /// Person names to detach-delete before the merge step.
    pub delete: Vec<String>,
    /// Outgoing side of the KNOWS relationship.
    pub name: String,
    /// Receiving side of the KNOWS relationship.
    pub friend: String,
}

impl Default for DemoPlan {
    fn default() -> Self {
        Self {
            delete: vec!["Alice".to_string(), "David".to_string()],
            name: "Alice".to_string(),
            friend: "David".to_string(),
        }
    }
}

/// Execute the demo operations in order, printing each summary.
pub async fn run_demo(graph: &GraphClient, plan: &DemoPlan) -> Result<()> {
    let deleted = graph.delete_people(&plan.delete).await?;
    println!("{}", delete_line(&plan.delete, &deleted));
    tracing::info!(nodes_deleted = deleted.nodes_deleted, "Delete step done");

    let merged = graph.merge_acquaintance(&plan.name, &plan.friend).await?;
    println!("{}", merge_line(&merged));
    tracing::info!(
        nodes_created = merged.nodes_created,
        relationships_created = merged.relationships_created,
        "Merge step done"
    );

    let read = graph.people_who_know().await?;
    for record in &read.records {
        println!("{}", serde_json::to_string(record)?);
    }
    println!("{}", read_line(&read));
    tracing::info!(records = read.records.len(), "Read step done");

    Ok(())
}

fn delete_line(names: &[String], summary: &DeleteSummary) -> String {
    format!(
        "Deleted {} Person node(s) named {:?} in {} ms.",
        summary.nodes_deleted,
        names,
        summary.elapsed.as_millis()
    )
}

fn merge_line(summary: &MergeSummary) -> String {
    format!(
        "Created {} node(s) and {} relationship(s) in {} ms.",
        summary.nodes_created,
        summary.relationships_created,
        summary.elapsed.as_millis()
    )
}

fn read_line(summary: &ReadSummary) -> String {
    format!(
        "The query '{}' returned {} record(s) in {} ms.",
        summary.query,
        summary.records.len(),
        summary.elapsed.as_millis()
    )
}
