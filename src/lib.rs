//! mariadb-ddl-fragments：把结构化的表/分区/视图/例程配置渲染为 DDL 片段。
//!
//! 所有渲染函数都是纯函数：没有内部状态，缺失或无效的输入只会让对应子句被省略。

pub mod catalog;
mod clauses;
pub mod error;
pub mod escape;
mod ingest;
pub mod partitioning;
pub mod quote;
pub mod routine;
#[cfg(test)]
mod routine_tests;
pub mod table_options;
pub mod value;
#[cfg(test)]
mod value_tests;
pub mod view;

pub use crate::catalog::{OptionCatalog, default_catalog};
pub use crate::error::{CatalogError, IngestError};
pub use crate::escape::{escape_for_literal, escape_quotes, wrap, wrap_quoted};
pub use crate::partitioning::{PartitionDefinition, Partitioning, render_partitioning};
pub use crate::quote::{quote_ident, quote_name};
pub use crate::routine::{RoutineCharacteristics, render_characteristics};
pub use crate::table_options::{TableOptions, TableOptionsRenderer, render_table_options};
pub use crate::value::{OptionValue, normalize};
pub use crate::view::{
    ViewColumn, ViewData, ViewKey, build_view_data, view_keys_from_json, view_keys_from_json_str,
};
