//! CLI entry point for the kith graph demo.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kith_graph::{GraphClient, GraphConfig};

use kith_cli::config::Credentials;
use kith_cli::runner::{run_demo, DemoPlan};

#[derive(Parser)]
#[command(name = "kith")]
#[command(about = "Neo4j mutation and query walkthrough")]
struct Cli {
    /// Credentials file (NEO4J_URI=... lines, as downloaded from Aura).
    #[arg(short, long, default_value = "neo4j.env")]
    credentials: PathBuf,

    /// Names to detach-delete before the merge step (repeatable).
    #[arg(
        long = "delete",
        value_name = "NAME",
        default_values_t = ["Alice".to_string(), "David".to_string()]
    )]
    delete: Vec<String>,

    /// Person on the outgoing side of the KNOWS relationship.
    #[arg(long, default_value = "Alice")]
    name: String,

    /// Person on the receiving side of the KNOWS relationship.
    #[arg(long, default_value = "David")]
    friend: String,
}

impl Cli {
    fn plan(&self) -> DemoPlan {
        DemoPlan {
            delete: self.delete.clone(),
            name: self.name.clone(),
            friend: self.friend.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let credentials = Credentials::load(&cli.credentials)?;

    let graph_config = GraphConfig {
        uri: credentials.uri.clone(),
        user: credentials.username.clone(),
        password: credentials.password.clone(),
        database: credentials.database.clone(),
        ..Default::default()
    };

    let graph = GraphClient::connect(&graph_config).await?;
    graph.verify_connectivity().await?;
    println!("Connection established.");

    run_demo(&graph, &cli.plan()).await?;

    Ok(())
}
