#[tokio::main]
async fn main() {
    if let Err(e) = activity_segmentation::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
