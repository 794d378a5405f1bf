// main.rs
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use csvfile_search::config::{self, CONFIG};
use csvfile_search::engine::SearchControllerBuilder;
use csvfile_search::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("csvfile_search=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1. 按配置构建控制器（可能包含启动时导入）
    let controller = SearchControllerBuilder::global().build()?;
    tracing::info!(" [Store] {}", controller.load_status());

    // 2. 启动 Web 服务
    let app = server::router(AppState::new(controller, config::size_precision()));
    let listener = tokio::net::TcpListener::bind(&CONFIG.server.bind_addr).await?;
    tracing::info!("++ 搜索页面: http://{}/search_file/", CONFIG.server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
