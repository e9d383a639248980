#[tokio::main]
async fn main() {
    unidash_backend::run().await;
}
