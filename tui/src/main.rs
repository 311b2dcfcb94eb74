//! quill binary entry point

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use quill_tui::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never write into the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    App::new().run().await
}
