use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    portfolio::cli::run().await
}
