#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eatwhat::run().await
}
