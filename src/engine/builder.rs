// engine/builder.rs - 控制器构建器
//! 使用 Builder 模式根据配置选择存储后端并构建 SearchController

use std::path::PathBuf;

use crate::config::{AppConfig, StoreBackend, CONFIG};
use crate::store::{MemoryRecordStore, RecordStore, SledRecordStore, StoreError};

use super::core::{EngineResult, SearchController};

/// 控制器构建器
pub struct SearchControllerBuilder {
    backend: StoreBackend,
    sled_path: PathBuf,
    initial_csv: Option<String>,
}

impl Default for SearchControllerBuilder {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SearchControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从全局配置创建
    pub fn global() -> Self {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            backend: config.store.backend,
            sled_path: PathBuf::from(&config.store.sled_path),
            initial_csv: config.import.initial_csv.clone(),
        }
    }

    /// 设置存储后端
    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    /// 设置 sled 数据目录
    pub fn with_sled_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sled_path = path.into();
        self
    }

    /// 构建完成后立即导入的 CSV 文件
    pub fn with_initial_csv(mut self, path: impl Into<String>) -> Self {
        self.initial_csv = Some(path.into());
        self
    }

    /// 构建控制器
    pub fn build(self) -> EngineResult<SearchController> {
        let store: Box<dyn RecordStore + Send> = match self.backend {
            StoreBackend::Memory => Box::new(MemoryRecordStore::new()),
            StoreBackend::Sled => {
                std::fs::create_dir_all(&self.sled_path).map_err(StoreError::from)?;
                Box::new(SledRecordStore::open(&self.sled_path)?)
            }
        };

        let mut controller = SearchController::new(store);

        // 初始导入失败不影响启动，状态已记录在日志里
        if let Some(path) = self.initial_csv.as_deref().filter(|p| !p.is_empty()) {
            controller.load(path);
        }

        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_builder_memory() {
        let controller = SearchControllerBuilder::new()
            .with_backend(StoreBackend::Memory)
            .build()
            .unwrap();
        assert_eq!(controller.count().unwrap(), 0);
    }

    #[test]
    fn test_builder_sled_with_initial_csv() {
        let temp_dir = tempdir().unwrap();
        let mut csv = NamedTempFile::new().unwrap();
        writeln!(csv, "FileName,FilePath,Size").unwrap();
        writeln!(csv, "a.txt,/data/a.txt,4K").unwrap();
        csv.flush().unwrap();

        let store_path = temp_dir.path().join("records");
        {
            let controller = SearchControllerBuilder::new()
                .with_backend(StoreBackend::Sled)
                .with_sled_path(&store_path)
                .with_initial_csv(csv.path().to_string_lossy())
                .build()
                .unwrap();
            assert_eq!(controller.count().unwrap(), 1);
        }

        // 重新打开后数据仍在
        let controller = SearchControllerBuilder::new()
            .with_backend(StoreBackend::Sled)
            .with_sled_path(&store_path)
            .build()
            .unwrap();
        assert_eq!(controller.load_status(), "Data loaded.");
    }

    #[test]
    fn test_builder_ignores_broken_initial_csv() {
        let controller = SearchControllerBuilder::new()
            .with_initial_csv("/no/such/file.csv")
            .build()
            .unwrap();
        assert_eq!(controller.count().unwrap(), 0);
    }
}
