// api/request.rs - 请求类型
//! 定义表单提交和 JSON 请求的结构化类型

use serde::{Deserialize, Serialize};

use crate::engine::Command;
use crate::query::SearchQuery;

/// 搜索页面的表单提交
///
/// 页面上每个表单只提交其中一个字段；多个字段同时出现时按
/// 读取文件、文件名、路径、扩展名、大小的顺序取第一个。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub read_file: Option<String>,

    #[serde(default)]
    pub searched_file_name: Option<String>,

    #[serde(default)]
    pub searched_file_path: Option<String>,

    #[serde(default)]
    pub searched_file_extension: Option<String>,

    #[serde(default)]
    pub searched_file_size: Option<String>,
}

impl SearchForm {
    /// 转换为控制器动作；没有任何已知字段时返回 None
    pub fn into_command(self) -> Option<Command> {
        if let Some(path) = self.read_file {
            return Some(Command::Load(path));
        }

        self.searched_file_name
            .map(SearchQuery::ByName)
            .or_else(|| self.searched_file_path.map(SearchQuery::ByPath))
            .or_else(|| self.searched_file_extension.map(SearchQuery::ByExtension))
            .or_else(|| self.searched_file_size.map(SearchQuery::BySize))
            .map(Command::Search)
    }
}

/// JSON 导入请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    /// 服务端可访问的 CSV 文件路径
    pub path: String,
}

impl From<LoadRequest> for Command {
    fn from(request: LoadRequest) -> Self {
        Command::Load(request.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_has_no_command() {
        assert_eq!(SearchForm::default().into_command(), None);
    }

    #[test]
    fn test_form_dispatch() {
        let form = SearchForm {
            searched_file_extension: Some(".txt".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.into_command(),
            Some(Command::Search(SearchQuery::ByExtension(".txt".to_string())))
        );

        let form = SearchForm {
            searched_file_size: Some(">2M".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.into_command(),
            Some(Command::Search(SearchQuery::BySize(">2M".to_string())))
        );
    }

    #[test]
    fn test_form_precedence() {
        let form = SearchForm {
            read_file: Some("files.csv".to_string()),
            searched_file_name: Some("foo".to_string()),
            ..Default::default()
        };
        assert_eq!(form.into_command(), Some(Command::Load("files.csv".to_string())));

        let form = SearchForm {
            searched_file_path: Some("/tmp".to_string()),
            searched_file_size: Some("<1K".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.into_command(),
            Some(Command::Search(SearchQuery::ByPath("/tmp".to_string())))
        );
    }

    #[test]
    fn test_load_request_json() {
        let request: LoadRequest = serde_json::from_str(r#"{"path":"/data/files.csv"}"#).unwrap();
        assert_eq!(Command::from(request), Command::Load("/data/files.csv".to_string()));
    }
}
