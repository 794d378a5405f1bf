// query/parser.rs - 大小条件解析器
//! 解析 "<=200K" 这类大小比较条件
//!
//! 支持的运算符（按优先级检查）: `==`, `<=`, `<`, `>=`, `>`
//! 运算符之后是数字和一个单位字母 (K/M/G，大小写不敏感)

use super::types::{SizeOperator, SizeQuery};
use crate::units::{self, SizeError};

/// 查询解析错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("no comparison operator in '{0}'")]
    MissingOperator(String),

    #[error("malformed size value in '{query}': {source}")]
    MalformedValue {
        query: String,
        #[source]
        source: SizeError,
    },
}

/// 解析大小条件
///
/// 运算符按 [`SizeOperator::PRECEDENCE`] 的顺序查找，取第一个出现在
/// 文本中的运算符；数值部分取该运算符最后一次出现之后的文本。
pub fn parse_size_query(input: &str) -> Result<SizeQuery, QueryError> {
    let operator = SizeOperator::PRECEDENCE
        .into_iter()
        .find(|op| input.contains(op.symbol()))
        .ok_or_else(|| QueryError::MissingOperator(input.to_string()))?;

    let value = input
        .rsplit_once(operator.symbol())
        .map(|(_, value)| value.trim())
        .unwrap_or_default();

    let bytes = units::to_bytes(value).map_err(|source| QueryError::MalformedValue {
        query: input.to_string(),
        source,
    })?;

    Ok(SizeQuery { operator, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitError;

    #[test]
    fn test_parse_two_char_operators() {
        let q = parse_size_query(">=2M").unwrap();
        assert_eq!(q.operator, SizeOperator::GreaterOrEqual);
        assert_eq!(q.bytes, 2_000_000.0);

        let q = parse_size_query("<=200K").unwrap();
        assert_eq!(q.operator, SizeOperator::LessOrEqual);
        assert_eq!(q.bytes, 200_000.0);

        let q = parse_size_query("==3g").unwrap();
        assert_eq!(q.operator, SizeOperator::Equal);
        assert_eq!(q.bytes, 3e9);
    }

    #[test]
    fn test_parse_single_char_operators() {
        let q = parse_size_query("<1K").unwrap();
        assert_eq!(q.operator, SizeOperator::LessThan);
        assert_eq!(q.bytes, 1000.0);

        let q = parse_size_query(">5M").unwrap();
        assert_eq!(q.operator, SizeOperator::GreaterThan);
        assert_eq!(q.bytes, 5e6);
    }

    #[test]
    fn test_parse_tolerates_spaces_around_value() {
        let q = parse_size_query("> 2M ").unwrap();
        assert_eq!(q.operator, SizeOperator::GreaterThan);
        assert_eq!(q.bytes, 2e6);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_size_query("2M"),
            Err(QueryError::MissingOperator("2M".to_string()))
        );
        // 单独的 '=' 不是运算符
        assert!(matches!(parse_size_query("=2M"), Err(QueryError::MissingOperator(_))));
        assert!(matches!(
            parse_size_query(">xyzM"),
            Err(QueryError::MalformedValue { source: SizeError::InvalidNumber(_), .. })
        ));
        assert!(matches!(
            parse_size_query(">2T"),
            Err(QueryError::MalformedValue { source: SizeError::Unit(UnitError::UnknownUnit('T')), .. })
        ));
        assert!(matches!(
            parse_size_query(">"),
            Err(QueryError::MalformedValue { source: SizeError::Empty, .. })
        ));
    }
}
