//! 视图投影：把有序的列引用拆分为引用到的表与（可能带表名限定的）列。

use crate::clauses::non_empty;
use crate::error::IngestError;
use crate::ingest;
use crate::quote::quote_ident;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewKey {
    pub name: String,
    pub alias: Option<String>,
    pub table_name: Option<String>,
    /// 原样透传，由下游决定是否注释掉该列。
    pub is_activated: Option<bool>,
}

impl ViewKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn activated(mut self, is_activated: bool) -> Self {
        self.is_activated = Some(is_activated);
        self
    }

    /// `` `name` `` 或 `` `name` as `alias` ``。
    pub fn column_text(&self) -> String {
        match non_empty(&self.alias) {
            Some(alias) => format!("{} as {}", quote_ident(&self.name), quote_ident(alias)),
            None => quote_ident(&self.name),
        }
    }

    fn from_json(v: &Value) -> Option<Self> {
        let obj = ingest::object(v)?;
        Some(Self {
            name: ingest::string(obj.get("name")).unwrap_or_default(),
            alias: ingest::truthy_text(obj.get("alias")),
            table_name: ingest::truthy_text(obj.get("tableName")),
            is_activated: obj.get("isActivated").and_then(Value::as_bool),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewColumn {
    /// 不带表名限定的列。
    Plain(String),
    Qualified {
        statement: String,
        is_activated: Option<bool>,
    },
}

impl ViewColumn {
    pub fn statement(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Qualified { statement, .. } => statement,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewData {
    /// 已加引号的表名，按首次出现顺序去重。
    pub tables: Vec<String>,
    pub columns: Vec<ViewColumn>,
}

/// `keys` 为 `None`（宿主传入的不是数组）时返回空结果。
pub fn build_view_data(keys: Option<&[ViewKey]>) -> ViewData {
    let mut data = ViewData::default();
    for key in keys.unwrap_or_default() {
        let Some(table_name) = non_empty(&key.table_name) else {
            data.columns.push(ViewColumn::Plain(key.column_text()));
            continue;
        };

        let table = quote_ident(table_name);
        let statement = format!("{table}.{}", key.column_text());
        if !data.tables.contains(&table) {
            data.tables.push(table);
        }
        data.columns.push(ViewColumn::Qualified {
            statement,
            is_activated: key.is_activated,
        });
    }
    data
}

/// 宿主 JSON 数组 → `ViewKey` 列表；不是数组时返回 `None`，非对象元素被跳过。
pub fn view_keys_from_json(v: &Value) -> Option<Vec<ViewKey>> {
    let items = v.as_array()?;
    Some(items.iter().filter_map(ViewKey::from_json).collect())
}

pub fn view_keys_from_json_str(json: &str) -> Result<Option<Vec<ViewKey>>, IngestError> {
    let v: Value = serde_json::from_str(json)?;
    Ok(view_keys_from_json(&v))
}
