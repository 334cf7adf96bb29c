use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    /// 健康检查中返回的服务名
    pub service_name: String,
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
    pub max_request_size_mb: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            service_name: "AI Brain".to_string(),
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
            max_request_size_mb: 10,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_address.is_empty() {
            return Err(anyhow::anyhow!("绑定地址不能为空"));
        }
        if !self.bind_address.contains(':') {
            return Err(anyhow::anyhow!("绑定地址格式无效，应为 host:port"));
        }
        if self.service_name.trim().is_empty() {
            return Err(anyhow::anyhow!("服务名不能为空"));
        }
        if self.max_request_size_mb == 0 {
            return Err(anyhow::anyhow!("最大请求大小必须大于0"));
        }

        Ok(())
    }

    pub fn max_request_size_bytes(&self) -> usize {
        self.max_request_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` 指令，`RUST_LOG` 优先
    pub log_level: String,
    /// `pretty` 或 `json`
    pub log_format: String,
    /// 是否输出每个工人的评分明细
    pub score_trace_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            score_trace_enabled: true,
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(anyhow::anyhow!("日志级别不能为空"));
        }
        match self.log_format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(anyhow::anyhow!("不支持的日志格式: {other}")),
        }
    }
}
