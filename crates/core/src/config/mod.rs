//! 推荐服务配置
//!
//! 加载顺序（后者覆盖前者）:
//! 1. 内置默认值
//! 2. TOML 配置文件
//! 3. 环境变量，格式为 `AXION_<SECTION>__<KEY>`，例如 `AXION_API__BIND_ADDRESS`

pub mod models;

pub use models::*;
