use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "FRUIT_CATALOG_CONFIG";
/// 覆盖监听端口的环境变量
pub const PORT_ENV: &str = "PORT";

/// 水果目录服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 目录初始数据
    pub catalog: CatalogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub request_timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 启动时写入目录的水果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: Vec<SeedFruit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFruit {
    pub name: String,
    pub price: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 用环境变量中的端口覆盖文件中的配置
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的 {}: {}", PORT_ENV, port)))?;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        // 初始数据同样要满足名称唯一
        let mut names = HashSet::new();
        for fruit in &self.catalog.seed {
            if fruit.name.is_empty() {
                return Err(ConfigError::Validation("初始水果名称不能为空".to_string()));
            }
            if !fruit.price.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "初始水果 {} 的价格无效",
                    fruit.name
                )));
            }
            if !names.insert(fruit.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "初始水果名称重复: {}",
                    fruit.name
                )));
            }
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 读取环境变量后按顺序查找配置文件，找不到时使用默认配置
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
    let port = std::env::var(PORT_ENV).ok();
    load_config_from(Path::new("."), env_path, port.as_deref())
}

/// 查找顺序：`env_path`、`base_dir/config.toml`、`base_dir/config/config.toml`
pub fn load_config_from(
    base_dir: &Path,
    env_path: Option<PathBuf>,
    port: Option<&str>,
) -> Result<AppConfig, ConfigError> {
    let mut config_paths: Vec<PathBuf> = Vec::new();
    if let Some(path) = env_path {
        if !path.exists() {
            return Err(ConfigError::FileRead(format!(
                "{} 指向的文件不存在: {}",
                CONFIG_PATH_ENV,
                path.display()
            )));
        }
        config_paths.push(path);
    }
    config_paths.push(base_dir.join("config.toml"));
    config_paths.push(base_dir.join("config").join("config.toml"));

    let mut config = match config_paths.iter().find(|path| path.exists()) {
        Some(path) => {
            info!("从配置文件加载: {}", path.display());
            AppConfig::load_from_file(path)?
        }
        None => {
            info!("未找到配置文件，使用默认配置");
            AppConfig::default()
        }
    };

    config.apply_port_override(port)?;
    config.validate()?;
    Ok(config)
}
