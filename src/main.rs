use tracing::Level;
use user_registry::{infrastructure::logger::Logger, serve, ServerConfig, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    Logger::init(Level::INFO);

    serve(ServerConfig::default(), UserStore::seeded()).await
}
