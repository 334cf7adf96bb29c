use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

/// 优雅关闭管理器
///
/// 关闭只会触发一次；在关闭之后订阅的接收器会立即收到信号。
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_tx: broadcast::Sender<()>,
    is_shutdown: Arc<AtomicBool>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            shutdown_tx,
            is_shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 订阅关闭信号
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        if self.is_shutdown() {
            let (tx, rx) = broadcast::channel(1);
            let _ = tx.send(());
            return rx;
        }
        self.shutdown_tx.subscribe()
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        if self.is_shutdown.swap(true, Ordering::SeqCst) {
            debug!("关闭管理器已经触发过关闭");
            return;
        }

        info!(
            "触发服务关闭，通知 {} 个订阅者",
            self.shutdown_tx.receiver_count()
        );
        // 没有订阅者时发送失败，可以忽略
        let _ = self.shutdown_tx.send(());
    }

    pub fn is_shutdown(&self) -> bool {
        self.is_shutdown.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

/// 等待接收器收到关闭信号，发送端被丢弃也视为关闭
pub async fn wait_for_shutdown(mut rx: broadcast::Receiver<()>) {
    let _ = rx.recv().await;
}

/// 等待Ctrl+C或SIGTERM
pub async fn wait_for_os_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("安装Ctrl+C信号处理器失败: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("安装SIGTERM信号处理器失败: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("收到Ctrl+C信号");
        },
        _ = terminate => {
            info!("收到SIGTERM信号");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_subscribers_receive_shutdown() {
        let manager = ShutdownManager::new();
        let rx1 = manager.subscribe();
        let rx2 = manager.clone().subscribe();

        manager.shutdown();

        assert!(timeout(Duration::from_secs(1), wait_for_shutdown(rx1)).await.is_ok());
        assert!(timeout(Duration::from_secs(1), wait_for_shutdown(rx2)).await.is_ok());
        assert!(manager.is_shutdown());
    }

    #[tokio::test]
    async fn test_late_subscriber_is_notified_immediately() {
        let manager = ShutdownManager::new();
        manager.shutdown();
        // 重复关闭是空操作
        manager.shutdown();

        let rx = manager.subscribe();
        assert!(timeout(Duration::from_secs(1), wait_for_shutdown(rx)).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_signal_before_shutdown() {
        let manager = ShutdownManager::new();
        let rx = manager.subscribe();

        assert!(timeout(Duration::from_millis(50), wait_for_shutdown(rx)).await.is_err());
        assert!(!manager.is_shutdown());
    }
}
