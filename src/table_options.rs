//! 表选项渲染：`CHARSET`、`COLLATE`、`ENGINE`、`COMMENT` 固定在前，其余按引擎登记顺序输出。

use crate::catalog::{OptionCatalog, SYSTEM_VERSIONING, default_catalog};
use crate::clauses::{Clauses, non_empty};
use crate::error::IngestError;
use crate::escape::escape_for_literal;
use crate::ingest;
use crate::value::{OptionValue, normalize};
use indexmap::IndexMap;
use serde_json::Value;

const CLAUSE_SEP: &str = ",\n\t";

/// 宿主对象中不属于引擎选项的字段。
const RESERVED_FIELDS: [&str; 5] = [
    "defaultCharSet",
    "characterSet",
    "collation",
    "ENGINE",
    "description",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    /// 为真时不输出 `CHARSET`/`COLLATE`（沿用库的默认字符集）。
    pub default_char_set: bool,
    pub character_set: Option<String>,
    pub collation: Option<String>,
    pub engine: Option<String>,
    pub description: Option<String>,
    /// 关键字 → 取值，例如 `ROW_FORMAT`、`KEY_BLOCK_SIZE`。
    pub values: IndexMap<String, OptionValue>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>, collation: impl Into<String>) -> Self {
        self.character_set = Some(charset.into());
        self.collation = Some(collation.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set(mut self, keyword: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.values.insert(keyword.into(), value.into());
        self
    }

    pub fn get(&self, keyword: &str) -> Option<&OptionValue> {
        self.values.get(keyword)
    }

    /// 从宿主 JSON 对象构建；非对象输入得到空选项。
    pub fn from_json(v: &Value) -> Self {
        let Some(obj) = ingest::object(v) else {
            return Self::default();
        };
        let values = obj
            .iter()
            .filter(|(k, _)| !RESERVED_FIELDS.contains(&k.as_str()))
            .filter_map(|(k, v)| ingest::scalar(Some(v)).map(|v| (k.clone(), v)))
            .collect();
        Self {
            default_char_set: ingest::truthy(obj.get("defaultCharSet")),
            character_set: ingest::truthy_text(obj.get("characterSet")),
            collation: ingest::truthy_text(obj.get("collation")),
            engine: ingest::truthy_text(obj.get("ENGINE")),
            description: ingest::truthy_text(obj.get("description")),
            values,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, IngestError> {
        let v: Value = serde_json::from_str(json)?;
        Ok(Self::from_json(&v))
    }
}

/// 绑定一份只读选项表的渲染器。
#[derive(Debug, Clone, Copy)]
pub struct TableOptionsRenderer<'c> {
    catalog: &'c OptionCatalog,
}

impl Default for TableOptionsRenderer<'static> {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl<'c> TableOptionsRenderer<'c> {
    pub fn new(catalog: &'c OptionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c OptionCatalog {
        self.catalog
    }

    /// 按输出顺序返回各个子句。
    pub fn clauses(&self, options: &TableOptions) -> Vec<String> {
        self.collect(options).into_vec()
    }

    /// 渲染为 ` k = v,\n\tk = v`；没有任何子句时返回空串。
    pub fn render(&self, options: &TableOptions) -> String {
        self.collect(options).join_prefixed(" ", CLAUSE_SEP)
    }

    fn collect(&self, options: &TableOptions) -> Clauses {
        let mut clauses = Clauses::new();

        if !options.default_char_set {
            if let Some(charset) = non_empty(&options.character_set) {
                clauses.push(format!("CHARSET={charset}"));
            }
            if let Some(collation) = non_empty(&options.collation) {
                clauses.push(format!("COLLATE={collation}"));
            }
        }

        let engine = non_empty(&options.engine);
        if let Some(engine) = engine {
            clauses.push(format!("ENGINE = {engine}"));
        }

        if let Some(description) = non_empty(&options.description) {
            clauses.push(format!("COMMENT = '{}'", escape_for_literal(description)));
        }

        for keyword in self.catalog.keywords_for(engine) {
            let token = self.catalog.token(keyword);
            if keyword == SYSTEM_VERSIONING {
                if options.get(keyword).is_some_and(OptionValue::is_truthy) {
                    clauses.push(token);
                }
                continue;
            }

            match normalize(keyword, options.get(keyword)) {
                Some(value) => clauses.push(format!("{token} = {value}")),
                None => tracing::trace!(keyword = keyword.as_str(), "table option omitted"),
            }
        }

        clauses
    }
}

/// 使用内置 MariaDB 选项表渲染。
pub fn render_table_options(options: &TableOptions) -> String {
    TableOptionsRenderer::default().render(options)
}
