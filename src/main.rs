use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    talksum::cli::run().await
}
