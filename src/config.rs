// 配置模块 - 支持外部配置文件
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 默认配置文件路径
const CONFIG_FILE: &str = "./config.toml";

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "CSVFILE_CONFIG";

// ============== 配置结构体 ==============

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub import: ImportConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_addr: String,
}

/// 记录存储后端
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// 进程内存储
    Memory,
    /// sled 持久化存储
    Sled,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// sled 数据目录
    pub sled_path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    /// 启动时自动导入的 CSV 文件（可选）
    #[serde(default)]
    pub initial_csv: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// 人类可读大小保留的小数位数
    pub size_precision: usize,
}

// ============== 默认配置 ==============

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "127.0.0.1:8000".to_string(),
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
                sled_path: "./storage".to_string(),
            },
            import: ImportConfig::default(),
            display: DisplayConfig { size_precision: 2 },
        }
    }
}

// ============== 配置加载 ==============

impl AppConfig {
    /// 从配置文件加载，失败则使用默认配置
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(" [Config] 无法加载配置文件 '{}': {}", path, e);
            tracing::warn!(" [Config] 使用默认配置");
            Self::default()
        })
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// 生成默认配置文件
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
        let default_content = include_str!("../config.toml");
        fs::write(path, default_content)?;
        Ok(())
    }
}

// ============== 全局配置实例 ==============

/// 全局配置实例 (懒加载)
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::load();
    tracing::info!(" [Config] 配置已加载 (存储后端: {:?})", config.store.backend);
    config
});

/// 获取人类可读大小的小数位数
pub fn size_precision() -> usize {
    CONFIG.display.size_precision
}
