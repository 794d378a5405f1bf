// api/html.rs - 搜索页面渲染
//! 生成带导入表单、四个搜索表单和结果表格的 HTML 页面

use std::fmt::Write;

use super::response::SearchResponse;

/// 表单提交地址
pub const SEARCH_FILE_PATH: &str = "/search_file/";

/// 每个搜索表单：(字段名, 标签, 占位提示)
const SEARCH_FORMS: [(&str, &str, &str); 4] = [
    ("searched_file_name", "File name contains", "report"),
    ("searched_file_path", "File path contains", "/home/user"),
    ("searched_file_extension", "File extension is", ".txt"),
    ("searched_file_size", "File size", ">=2M"),
];

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn single_field_form(html: &mut String, field: &str, label: &str, placeholder: &str) {
    // 写入 String 不会失败
    let _ = write!(
        html,
        r#"<form method="post" action="{action}">
  <label for="{field}">{label}</label>
  <input type="text" id="{field}" name="{field}" placeholder="{placeholder}">
  <button type="submit">Go</button>
</form>
"#,
        action = SEARCH_FILE_PATH,
        field = field,
        label = escape_html(label),
        placeholder = escape_html(placeholder),
    );
}

/// 渲染完整页面
pub fn render_search_page(response: &SearchResponse) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>CSV file search</title></head>\n<body>\n",
    );

    html.push_str("<h2>Load data</h2>\n");
    single_field_form(&mut html, "read_file", "CSV file path", "./files.csv");
    let _ = writeln!(html, "<p class=\"load-status\">{}</p>", escape_html(&response.load_status));

    html.push_str("<h2>Search</h2>\n");
    for (field, label, placeholder) in SEARCH_FORMS {
        single_field_form(&mut html, field, label, placeholder);
    }

    if let Some(status) = &response.query_status {
        let _ = writeln!(html, "<p class=\"query-status\">{}</p>", escape_html(status));
    }

    if !response.entries.is_empty() {
        html.push_str(
            "<table>\n<tr><th>FileName</th><th>FilePath</th><th>Size</th><th>FileExtension</th></tr>\n",
        );
        for entry in &response.entries {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td title=\"{}\">{}</td><td>{}</td></tr>",
                escape_html(&entry.file_name),
                escape_html(&entry.file_path),
                escape_html(&entry.size),
                escape_html(&entry.size_display),
                escape_html(&entry.file_extension),
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryResponse;

    fn response(entries: Vec<EntryResponse>, query_status: Option<&str>) -> SearchResponse {
        SearchResponse {
            total: entries.len(),
            entries,
            load_status: "Data loaded.".to_string(),
            query_status: query_status.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_page_has_all_forms() {
        let html = render_search_page(&response(Vec::new(), None));
        for field in ["read_file", "searched_file_name", "searched_file_path", "searched_file_extension", "searched_file_size"] {
            assert!(html.contains(&format!("name=\"{}\"", field)), "missing {}", field);
        }
        assert!(html.contains("Data loaded."));
        assert!(!html.contains("<table>"));
        assert!(!html.contains("query-status"));
    }

    #[test]
    fn test_page_escapes_results() {
        let entry = EntryResponse {
            file_name: "<script>.js".to_string(),
            file_path: "/tmp/".to_string(),
            size: "1K".to_string(),
            file_extension: "js".to_string(),
            uniform_size: 1e3,
            size_display: "1.00 KB".to_string(),
        };
        let html = render_search_page(&response(vec![entry], Some("1 entry found for (<s> contained in FileName)")));

        assert!(html.contains("&lt;script&gt;.js"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("1 entry found for (&lt;s&gt; contained in FileName)"));
        assert!(html.contains("<td title=\"1K\">1.00 KB</td>"));
    }
}
