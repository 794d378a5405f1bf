// engine/core.rs - 查询控制器核心
//! 导入 CSV、分派四种过滤查询、生成给用户看的状态文本

use std::path::Path;

use crate::ingest::{self, ImportError};
use crate::query::{parse_size_query, QueryError, SearchQuery};
use crate::schema::{FileRecord, NumericField, TextField};
use crate::store::{RecordStore, StoreError};

/// 控制器错误类型
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Empty database.")]
    EmptyStore,

    #[error("Empty query.")]
    EmptyQuery,

    #[error("Error - Query not formatted correctly.")]
    MalformedQuery(#[source] QueryError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("Error - {0}")]
    Store(#[from] StoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// 转换为页面上显示的状态文本
    pub fn status(&self) -> String {
        match self {
            EngineError::Import(ImportError::FileNotFound(path)) => format!(
                "Error - The csv file '{}' does not exist. No data loaded.",
                path.display()
            ),
            EngineError::Import(ImportError::MalformedCsv { path, .. }) => format!(
                "Error - The csv file '{}' has structure issues. No data loaded.",
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

/// 表单提交后要执行的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 读取 CSV 文件，替换全部数据
    Load(String),
    /// 过滤查询
    Search(SearchQuery),
}

/// 一次成功查询的结果
#[derive(Debug, Clone)]
pub struct QueryMatches {
    pub entries: Vec<FileRecord>,
    /// 查询描述，如 "foo contained in FileName"
    pub description: String,
}

/// 一次请求处理后的完整输出
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub entries: Vec<FileRecord>,
    pub load_status: String,
    pub query_status: Option<String>,
}

/// 查询控制器，持有注入的记录存储
pub struct SearchController {
    store: Box<dyn RecordStore + Send>,
}

impl SearchController {
    pub fn new(store: Box<dyn RecordStore + Send>) -> Self {
        Self { store }
    }

    /// 当前记录数
    pub fn count(&self) -> EngineResult<usize> {
        Ok(self.store.count()?)
    }

    /// 数据库状态文本
    pub fn load_status(&self) -> String {
        match self.store.count() {
            Ok(0) => "Empty database. Please load data.".to_string(),
            Ok(_) => "Data loaded.".to_string(),
            Err(e) => EngineError::from(e).status(),
        }
    }

    /// 导入 CSV：先清空存储，成功后写入新数据，返回写入条数
    ///
    /// 失败时存储保持清空状态，不回滚到之前的数据。
    pub fn try_load(&mut self, path: &Path) -> EngineResult<usize> {
        self.store.clear()?;

        let records = ingest::import_file(path)?;
        let count = records.len();
        self.store.bulk_insert(records)?;
        Ok(count)
    }

    /// 导入 CSV 并返回状态文本
    pub fn load(&mut self, path: &str) -> String {
        match self.try_load(Path::new(path)) {
            Ok(count) => {
                tracing::info!(" [Import] 已从 '{}' 导入 {} 条记录", path, count);
                format!("Data loaded from '{}'.", path)
            }
            Err(e) => {
                tracing::warn!(" [Import] 导入 '{}' 失败: {}", path, e);
                e.status()
            }
        }
    }

    /// 执行查询，返回命中的记录和查询描述
    pub fn try_search(&self, query: &SearchQuery) -> EngineResult<QueryMatches> {
        self.pre_query_check(query.text())?;

        let (entries, description) = match query {
            SearchQuery::ByName(text) => (
                self.store.filter_contains(TextField::FileName, text)?,
                format!("{} contained in {}", text, TextField::FileName.name()),
            ),
            SearchQuery::ByPath(text) => (
                self.store.filter_contains(TextField::FilePath, text)?,
                format!("{} contained in {}", text, TextField::FilePath.name()),
            ),
            SearchQuery::ByExtension(text) => {
                let ext = text.strip_prefix('.').unwrap_or(text);
                (
                    self.store.filter_equals(TextField::FileExtension, ext)?,
                    format!("{} for {}", ext, TextField::FileExtension.name()),
                )
            }
            SearchQuery::BySize(text) => {
                let size = parse_size_query(text).map_err(EngineError::MalformedQuery)?;
                (
                    self.store
                        .filter_compare(NumericField::UniformSize, size.operator, size.bytes)?,
                    format!("{} for {}", text, TextField::Size.name()),
                )
            }
        };

        tracing::debug!(" [Query] {:?} -> {} 条结果", query, entries.len());
        Ok(QueryMatches { entries, description })
    }

    /// 执行查询；任何错误都转成状态文本，结果为空
    pub fn search(&self, query: &SearchQuery) -> (Vec<FileRecord>, String) {
        match self.try_search(query) {
            Ok(matches) => {
                let status = format_query(matches.entries.len(), &matches.description);
                (matches.entries, status)
            }
            Err(e) => {
                tracing::debug!(" [Query] {:?} 被拒绝: {}", query, e);
                (Vec::new(), e.status())
            }
        }
    }

    /// 处理一次表单提交；没有动作时只返回数据库状态
    pub fn handle(&mut self, command: Option<Command>) -> Outcome {
        match command {
            Some(Command::Load(path)) => Outcome {
                load_status: self.load(&path),
                ..Default::default()
            },
            Some(Command::Search(query)) => {
                let (entries, status) = self.search(&query);
                Outcome {
                    entries,
                    load_status: self.load_status(),
                    query_status: Some(status),
                }
            }
            None => Outcome {
                load_status: self.load_status(),
                ..Default::default()
            },
        }
    }

    /// 存储为空或查询文本为空时拒绝查询
    fn pre_query_check(&self, text: &str) -> EngineResult<()> {
        if self.store.is_empty()? {
            return Err(EngineError::EmptyStore);
        }
        if text.is_empty() {
            return Err(EngineError::EmptyQuery);
        }
        Ok(())
    }
}

/// 生成查询结果摘要，如 "2 entries found for (foo contained in FileName)"
pub fn format_query(count: usize, description: &str) -> String {
    let noun = if count > 1 { "entries" } else { "entry" };
    format!("{} {} found for ({})", count, noun, description)
}
