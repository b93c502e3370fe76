mod app;
mod feed;
mod logging;
mod render;

#[tokio::main]
async fn main() {
    logging::initialize(logging::LogDestination::File);
    app::run().await;
}
