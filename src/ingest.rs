//! 接入边界：把宿主传入的 JSON 元数据一次性转换为强类型模型。
//!
//! 真值规则与宿主保持一致：`null`、`false`、`0`、`""` 为假。

use crate::value::{OptionValue, format_number};
use serde_json::{Map, Value};

pub(crate) fn truthy(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// 标量值转为 `OptionValue`；`null`、数组、对象视为缺失。
pub(crate) fn scalar(v: Option<&Value>) -> Option<OptionValue> {
    match v? {
        Value::Bool(b) => Some(OptionValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(OptionValue::Number),
        Value::String(s) => Some(OptionValue::Text(s.clone())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// 为真的标量取其文本形式，否则 `None`。
pub(crate) fn truthy_text(v: Option<&Value>) -> Option<String> {
    if !truthy(v) {
        return None;
    }
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        Value::Bool(_) => Some("true".to_string()),
        _ => None,
    }
}

/// 字符串字段（不要求为真，空串保留）。
pub(crate) fn string(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        _ => None,
    }
}

pub(crate) fn object(v: &Value) -> Option<&Map<String, Value>> {
    v.as_object()
}

#[cfg(test)]
mod tests {
    use super::{scalar, string, truthy, truthy_text};
    use crate::value::OptionValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn truthiness_matches_host() {
        assert!(!truthy(None));
        assert!(!truthy(Some(&json!(null))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
        assert!(!truthy(Some(&json!(false))));
        assert!(truthy(Some(&json!("0"))));
        assert!(truthy(Some(&json!(2))));
        assert!(truthy(Some(&json!([]))));
    }

    #[test]
    fn scalar_conversion() {
        assert_eq!(scalar(Some(&json!(8))), Some(OptionValue::Number(8.0)));
        assert_eq!(scalar(Some(&json!("x"))), Some(OptionValue::from("x")));
        assert_eq!(scalar(Some(&json!(true))), Some(OptionValue::Bool(true)));
        assert_eq!(scalar(Some(&json!(null))), None);
        assert_eq!(scalar(Some(&json!({"a": 1}))), None);
    }

    #[test]
    fn text_conversion() {
        assert_eq!(truthy_text(Some(&json!("utf8"))), Some("utf8".to_string()));
        assert_eq!(truthy_text(Some(&json!(4))), Some("4".to_string()));
        assert_eq!(truthy_text(Some(&json!(""))), None);
        assert_eq!(string(Some(&json!(""))), Some(String::new()));
        assert_eq!(string(Some(&json!(null))), None);
    }
}
