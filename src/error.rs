//! 错误类型：只出现在配置加载/接入边界，渲染函数本身不会失败。

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("option catalog is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("engine `{engine}` lists option `{keyword}` without a sql token")]
    MissingToken { engine: String, keyword: String },
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("schema metadata is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
