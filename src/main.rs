#[tokio::main]
async fn main() -> anyhow::Result<()> {
    iss_tracker::run().await
}
