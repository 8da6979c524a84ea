//! 表选项取值：在接入边界一次性决定类型，之后只做 match。

use crate::escape::wrap_quoted;
use std::borrow::Cow;
use std::fmt;

/// 选项原始值。
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Number(f64),
    Text(String),
    Bool(bool),
    /// 调用方提供的 SQL 片段，原样输出。
    Raw(String),
}

/// 取值需转为大写、值为假时省略的关键字。
const UPPERCASED_KEYWORDS: [&str; 2] = ["ROW_FORMAT", "INSERT_METHOD"];

/// 直接透传的关键字（如 `UNION = (t1,t2)`）。
const PASSTHROUGH_KEYWORD: &str = "UNION";

/// 布尔风格的关键字取值。
const KEYWORD_VALUES: [&str; 3] = ["YES", "NO", "DEFAULT"];

impl OptionValue {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// 与宿主模型一致的真值判断：`0`、`NaN`、空串、`false` 为假。
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) | Self::Raw(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// 有限的数值形式；文本按宿主的数值转换规则解析。
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => parse_number(s).filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// 原样文本（用于拼接而非取值规范化的场合）。
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Text(s) | Self::Raw(s) => Cow::Borrowed(s),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// 按宿主的数值转换规则解析文本：去除首尾空白后为空视为 `0`，
/// 支持 `0x`/`0o`/`0b` 前缀与 `Infinity`；无法转换时返回 `None`。
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }

    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = t.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = t.strip_prefix(['+', '-']).unwrap_or(t);
    if unsigned == "Infinity" {
        return Some(if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    // `str::parse` 还接受 `inf`、`nan` 等写法，宿主不认
    if unsigned
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    t.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// 与宿主一致的数值文本：`[1e-6, 1e21)` 之外改用指数形式（`1e+21`、`1e-7`）。
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        // 统一 `-0` 与 `0`
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// 把选项值转换为 SQL 字面量；返回 `None` 表示省略该子句。
pub fn normalize(keyword: &str, value: Option<&OptionValue>) -> Option<String> {
    let value = value?;

    if UPPERCASED_KEYWORDS.contains(&keyword) {
        if !value.is_truthy() {
            return None;
        }
        return Some(value.as_text().to_uppercase());
    }

    if keyword == PASSTHROUGH_KEYWORD {
        return Some(value.as_text().into_owned());
    }

    match value {
        OptionValue::Raw(sql) => Some(sql.clone()),
        OptionValue::Bool(b) => Some(if *b { "YES" } else { "NO" }.to_string()),
        OptionValue::Number(n) if n.is_finite() => Some(format_number(*n)),
        OptionValue::Number(_) => None,
        OptionValue::Text(s) => {
            let upper = s.to_uppercase();
            if KEYWORD_VALUES.contains(&upper.as_str()) {
                return Some(upper);
            }
            if s.is_empty() {
                return None;
            }
            // 非有限数（`Infinity`）与数值一样被省略
            if let Some(n) = parse_number(s) {
                return n.is_finite().then(|| format_number(n));
            }
            Some(wrap_quoted(s))
        }
    }
}
