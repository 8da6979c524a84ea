//! 分区子句：`PARTITION BY … PARTITIONS n SUBPARTITION BY … SUBPARTITIONS n (定义)`。

use crate::clauses::{Clauses, non_empty};
use crate::error::IngestError;
use crate::escape::wrap;
use crate::ingest;
use crate::value::OptionValue;
use serde_json::Value;

/// 系统版本表的分区类型，使用 `INTERVAL` 而不是表达式。
pub const SYSTEM_TIME: &str = "SYSTEM_TIME";

const CLAUSE_SEP: &str = "\n\t";
const DEFINITION_SEP: &str = ",\n\t\t";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionDefinition {
    pub partition_definition: String,
    pub subpartition_definition: Option<String>,
}

impl PartitionDefinition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            partition_definition: definition.into(),
            subpartition_definition: None,
        }
    }

    pub fn with_subpartitions(mut self, definition: impl Into<String>) -> Self {
        self.subpartition_definition = Some(definition.into());
        self
    }

    fn render(&self) -> Option<String> {
        if self.partition_definition.is_empty() {
            return None;
        }
        match non_empty(&self.subpartition_definition) {
            Some(sub) => Some(format!(
                "{} {}",
                self.partition_definition,
                wrap(sub, "(", ")")
            )),
            None => Some(self.partition_definition.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioning {
    /// `HASH`、`KEY`、`RANGE`、`LIST`、`RANGE COLUMNS`、`SYSTEM_TIME` 等。
    pub partition_type: Option<String>,
    pub linear: bool,
    pub partitioning_expression: Option<String>,
    /// 只对 `SYSTEM_TIME` 有意义。
    pub interval: Option<OptionValue>,
    pub time_unit: Option<String>,
    pub partitions: Option<OptionValue>,
    pub subpartition_type: Option<String>,
    pub sublinear: bool,
    pub subpartitioning_expression: Option<String>,
    pub subpartitions: Option<OptionValue>,
    pub partition_definitions: Vec<PartitionDefinition>,
}

impl Partitioning {
    pub fn new(partition_type: impl Into<String>) -> Self {
        Self {
            partition_type: Some(partition_type.into()),
            ..Self::default()
        }
    }

    /// 从宿主 JSON 对象构建；非对象输入视为未分区。
    pub fn from_json(v: &Value) -> Self {
        let Some(obj) = ingest::object(v) else {
            return Self::default();
        };
        let partition_definitions = obj
            .get("partition_definitions")
            .and_then(Value::as_array)
            .map(|defs| {
                defs.iter()
                    .filter_map(ingest::object)
                    .map(|d| PartitionDefinition {
                        partition_definition: ingest::truthy_text(d.get("partitionDefinition"))
                            .unwrap_or_default(),
                        subpartition_definition: ingest::truthy_text(
                            d.get("subpartitionDefinition"),
                        ),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            partition_type: ingest::truthy_text(obj.get("partitionType")),
            linear: ingest::truthy(obj.get("LINEAR")),
            partitioning_expression: ingest::string(obj.get("partitioning_expression")),
            interval: ingest::scalar(obj.get("interval")),
            time_unit: ingest::truthy_text(obj.get("time_unit")),
            partitions: ingest::scalar(obj.get("partitions")),
            subpartition_type: ingest::truthy_text(obj.get("subpartitionType")),
            sublinear: ingest::truthy(obj.get("SUBLINEAR")),
            subpartitioning_expression: ingest::string(obj.get("subpartitioning_expression")),
            subpartitions: ingest::scalar(obj.get("subpartitions")),
            partition_definitions,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, IngestError> {
        let v: Value = serde_json::from_str(json)?;
        Ok(Self::from_json(&v))
    }

    fn partition_by(&self, partition_type: &str) -> String {
        if partition_type == SYSTEM_TIME {
            return format!("PARTITION BY {SYSTEM_TIME}{}", self.interval_clause());
        }
        format!(
            "PARTITION BY {}",
            typed_expression(
                self.linear,
                partition_type,
                self.partitioning_expression.as_deref()
            )
        )
    }

    /// ` INTERVAL n [unit]`；间隔不是非零数值时整体省略，单位不会单独出现。
    fn interval_clause(&self) -> String {
        let Some(interval) = self
            .interval
            .as_ref()
            .filter(|v| v.is_truthy() && v.as_number().is_some())
        else {
            return String::new();
        };
        match non_empty(&self.time_unit) {
            Some(unit) => format!(" INTERVAL {interval} {unit}"),
            None => format!(" INTERVAL {interval}"),
        }
    }

    fn subpartition_by(&self) -> Option<String> {
        let sub_type = non_empty(&self.subpartition_type)?;
        Some(format!(
            "SUBPARTITION BY {}",
            typed_expression(
                self.sublinear,
                sub_type,
                self.subpartitioning_expression.as_deref()
            )
        ))
    }

    fn definitions(&self) -> Option<String> {
        let mut defs = Clauses::new();
        for d in &self.partition_definitions {
            defs.push_opt(d.render());
        }
        if defs.is_empty() {
            return None;
        }
        let body = defs.join_prefixed("\n\t\t", DEFINITION_SEP);
        Some(wrap(&format!("{body}\n\t"), "(", ")"))
    }

    /// 渲染完整分区子句；未指定分区类型时返回空串。
    pub fn render(&self) -> String {
        let Some(partition_type) = non_empty(&self.partition_type) else {
            return String::new();
        };

        let mut clauses = Clauses::new();
        clauses.push(self.partition_by(partition_type));
        clauses.push_opt(count_clause("PARTITIONS", self.partitions.as_ref()));
        clauses.push_opt(self.subpartition_by());
        clauses.push_opt(count_clause("SUBPARTITIONS", self.subpartitions.as_ref()));
        clauses.push_opt(self.definitions());
        clauses.join_prefixed(CLAUSE_SEP, CLAUSE_SEP)
    }
}

// LINEAR 前缀不校验是否适用于该分区类型。
fn typed_expression(linear: bool, kind: &str, expression: Option<&str>) -> String {
    let prefix = if linear { "LINEAR " } else { "" };
    let expression = expression.unwrap_or_default().trim();
    format!("{prefix}{kind}({expression})")
}

fn count_clause(keyword: &str, count: Option<&OptionValue>) -> Option<String> {
    count
        .filter(|c| c.is_truthy())
        .map(|c| format!("{keyword} {c}"))
}

pub fn render_partitioning(partitioning: &Partitioning) -> String {
    partitioning.render()
}
