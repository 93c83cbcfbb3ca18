#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_backend::run().await
}
