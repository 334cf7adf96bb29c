use std::net::SocketAddr;

use anyhow::{Context, Result};
use axion_api::create_app;
use axion_core::AppConfig;
use axum::Router;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::info;

use crate::shutdown::wait_for_shutdown;

/// 推荐服务应用
pub struct Application {
    config: AppConfig,
    router: Router,
}

impl Application {
    /// 创建新的应用实例，评分策略无效时失败
    pub fn new(config: AppConfig) -> Result<Self> {
        let router = create_app(&config).context("创建API应用失败")?;
        info!(
            "初始化推荐服务: {} (评分预设: {})",
            config.api.service_name, config.scoring.preset
        );

        Ok(Self { config, router })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 绑定配置中的监听地址
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind(&self.config.api.bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", self.config.api.bind_address))
    }

    /// 在给定监听器上提供服务，直到收到关闭信号
    ///
    /// 收到信号后停止接受新连接，并等待进行中的请求完成。
    pub async fn run(self, listener: TcpListener, shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let addr: SocketAddr = listener.local_addr().context("读取监听地址失败")?;
        info!("API服务器启动在 http://{}", addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                wait_for_shutdown(shutdown_rx).await;
                info!("API服务器收到关闭信号");
            })
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }

    /// 绑定配置地址并运行
    pub async fn serve(self, shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let listener = self.bind().await?;
        self.run(listener, shutdown_rx).await
    }
}
