#[tokio::main]
async fn main() {
    marketscan::cli::run().await;
}
