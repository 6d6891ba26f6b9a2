//! Txstats Server
//!
//! Main entry point for the transaction statistics server

use txstats::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	ServerBuilder::new().start_server().await
}
