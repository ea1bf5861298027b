//! Game server binary.
//!
//! Runs the HTTP server backing the browser client: game creation,
//! choice submission, round results, round advancement.

use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::Server::run().await?;
    Ok(())
}
