//! 例程特性（存储过程/函数）：顺序固定为语言、确定性、安全性、注释。

use crate::clauses::non_empty;
use crate::error::IngestError;
use crate::escape::{escape_quotes, wrap_quoted};
use crate::ingest;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineCharacteristics {
    /// 只看是否设置，取值本身不参与输出。
    pub language: bool,
    /// 原样输出，例如 `DETERMINISTIC` / `NOT DETERMINISTIC`。
    pub deterministic: Option<String>,
    /// `DEFINER` / `INVOKER`。
    pub sql_security: Option<String>,
    pub comment: Option<String>,
}

impl RoutineCharacteristics {
    pub fn from_json(v: &Value) -> Self {
        let Some(obj) = ingest::object(v) else {
            return Self::default();
        };
        Self {
            language: ingest::truthy(obj.get("language")),
            deterministic: ingest::truthy_text(obj.get("deterministic")),
            sql_security: ingest::truthy_text(obj.get("sqlSecurity")),
            comment: ingest::truthy_text(obj.get("comment")),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, IngestError> {
        let v: Value = serde_json::from_str(json)?;
        Ok(Self::from_json(&v))
    }

    /// 只返回已设置的特性，分隔符由调用方决定。
    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(4);
        if self.language {
            out.push("LANGUAGE SQL".to_string());
        }
        if let Some(deterministic) = non_empty(&self.deterministic) {
            out.push(deterministic.to_string());
        }
        if let Some(security) = non_empty(&self.sql_security) {
            out.push(format!("SQL SECURITY {security}"));
        }
        if let Some(comment) = non_empty(&self.comment) {
            out.push(format!("COMMENT {}", wrap_quoted(&escape_quotes(comment))));
        }
        out
    }
}

pub fn render_characteristics(characteristics: &RoutineCharacteristics) -> Vec<String> {
    characteristics.render()
}
