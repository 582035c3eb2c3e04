//! 水果目录 HTTP 服务入口

use anyhow::Context;
use fruit_catalog::{
    build_app, config, infrastructure::Logger, AppState, CatalogStore, FruitService,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging);

    info!("启动水果目录服务...");

    let fruit_service = FruitService::new(CatalogStore::new());
    let seeded = fruit_service
        .seed(&config.catalog.seed)
        .await
        .context("写入初始数据失败")?;
    info!("✅ 已初始化 {} 个示例水果", seeded);

    let app = build_app(
        AppState { fruit_service },
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 水果目录服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /fruits      - 获取所有水果");
    info!("   POST   /fruits      - 创建新水果");
    info!("   GET    /fruits/:id  - 获取特定水果");
    info!("   GET    /health      - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("收到退出信号，正在关闭服务...");
        })
        .await
        .context("服务器异常退出")?;

    Ok(())
}
