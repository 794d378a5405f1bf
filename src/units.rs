// units.rs - 文件大小单位换算
//! 把 "2M" 这类简写换算成统一的字节数

/// 单位表：字母 -> 字节倍数（十进制）
const UNIT_TABLE: [(char, f64); 3] = [('K', 1e3), ('M', 1e6), ('G', 1e9)];

/// 单位换算错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown size unit '{0}'")]
    UnknownUnit(char),
}

/// 大小字符串解析错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SizeError {
    #[error("size string is empty")]
    Empty,

    #[error("invalid size number '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// 返回单位字母对应的倍数（大小写不敏感）
pub fn multiplier(unit: char) -> Result<f64, UnitError> {
    let upper = unit.to_ascii_uppercase();
    UNIT_TABLE
        .iter()
        .find(|(letter, _)| *letter == upper)
        .map(|(_, factor)| *factor)
        .ok_or(UnitError::UnknownUnit(unit))
}

/// 解析 "数字 + 单位字母" 形式的大小，返回字节数
///
/// 最后一个字符是单位，其余部分是数字。数字必须是非负的有限值。
pub fn to_bytes(size: &str) -> Result<f64, SizeError> {
    let unit = size.chars().last().ok_or(SizeError::Empty)?;
    let digits = &size[..size.len() - unit.len_utf8()];

    let value: f64 = digits
        .trim()
        .parse()
        .map_err(|_| SizeError::InvalidNumber(digits.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(SizeError::InvalidNumber(digits.to_string()));
    }

    Ok(value * multiplier(unit)?)
}
