//! 标识符引用：用反引号包裹名称（MariaDB/MySQL 风格）。

/// 标识符引号字符。
pub const IDENT_QUOTE: char = '`';

/// 包裹单个标识符；名称内部的反引号不会被转义，调用方需保证名称已校验。
pub fn quote_ident(name: &str) -> String {
    format!("{IDENT_QUOTE}{name}{IDENT_QUOTE}")
}

/// 生成 `` `schema`.`name` `` 或 `` `name` ``；空 schema 视为未提供。
pub fn quote_name(name: &str, schema: Option<&str>) -> String {
    match schema {
        Some(schema) if !schema.is_empty() => {
            format!("{}.{}", quote_ident(schema), quote_ident(name))
        }
        _ => quote_ident(name),
    }
}
