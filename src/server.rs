//! 服务启动

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::app::users::UserStore;
use crate::core::routes::build_router_with_limit;
use crate::infrastructure::config::ServerConfig;

/// 绑定端口并运行服务，直到收到 Ctrl+C
pub async fn serve(config: ServerConfig, users: UserStore) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    serve_with_listener(listener, config, users, shutdown_signal()).await
}

/// 在已绑定的监听器上运行服务，`shutdown` 完成后优雅退出
pub async fn serve_with_listener<F>(
    listener: TcpListener,
    config: ServerConfig,
    users: UserStore,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("无法获取监听地址")?;
    let app = build_router_with_limit(users.clone(), config.body_limit);

    info!("app listening on port {}", local_addr.port());
    info!("🚀 用户注册服务运行在 http://{}, 初始用户 {} 个", local_addr, users.len());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("服务运行失败")?;

    info!("服务已安全关闭");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("收到停止信号，正在关闭服务..."),
        Err(e) => warn!("无法监听 Ctrl+C: {}", e),
    }
}
