//! OptionCatalog：关键字 → SQL 选项名、存储引擎 → 可用关键字（有序）。
//!
//! 作为不可变配置数据注入渲染器；内置 MariaDB 表之外也可以从 JSON 加载。

use crate::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// 引擎未知时使用的关键字列表。
pub const FALLBACK_KEYWORDS: [&str; 3] = ["KEY_BLOCK_SIZE", "PACK_KEYS", "WITH_SYSTEM_VERSIONING"];

/// 独立子句（不带 `= value`）的关键字。
pub const SYSTEM_VERSIONING: &str = "WITH_SYSTEM_VERSIONING";

const MARIADB_TOKENS: &[(&str, &str)] = &[
    ("AUTO_INCREMENT", "AUTO_INCREMENT"),
    ("AVG_ROW_LENGTH", "AVG_ROW_LENGTH"),
    ("CHECKSUM", "CHECKSUM"),
    ("CONNECTION", "CONNECTION"),
    ("DATA_DIRECTORY", "DATA DIRECTORY"),
    ("DELAY_KEY_WRITE", "DELAY_KEY_WRITE"),
    ("ENCRYPTED", "ENCRYPTED"),
    ("ENCRYPTION_KEY_ID", "ENCRYPTION_KEY_ID"),
    ("IETF_QUOTES", "IETF_QUOTES"),
    ("INDEX_DIRECTORY", "INDEX DIRECTORY"),
    ("INSERT_METHOD", "INSERT_METHOD"),
    ("KEY_BLOCK_SIZE", "KEY_BLOCK_SIZE"),
    ("MAX_ROWS", "MAX_ROWS"),
    ("MIN_ROWS", "MIN_ROWS"),
    ("PACK_KEYS", "PACK_KEYS"),
    ("PAGE_CHECKSUM", "PAGE_CHECKSUM"),
    ("PAGE_COMPRESSED", "PAGE_COMPRESSED"),
    ("PAGE_COMPRESSION_LEVEL", "PAGE_COMPRESSION_LEVEL"),
    ("ROW_FORMAT", "ROW_FORMAT"),
    ("SEQUENCE", "SEQUENCE"),
    ("STATS_AUTO_RECALC", "STATS_AUTO_RECALC"),
    ("STATS_PERSISTENT", "STATS_PERSISTENT"),
    ("STATS_SAMPLE_PAGES", "STATS_SAMPLE_PAGES"),
    ("TRANSACTIONAL", "TRANSACTIONAL"),
    ("UNION", "UNION"),
    ("WITH_SYSTEM_VERSIONING", "WITH SYSTEM VERSIONING"),
];

const MARIADB_ENGINES: &[(&str, &[&str])] = &[
    (
        "InnoDB",
        &[
            "AUTO_INCREMENT",
            "AVG_ROW_LENGTH",
            "CHECKSUM",
            "DATA_DIRECTORY",
            "ENCRYPTED",
            "ENCRYPTION_KEY_ID",
            "KEY_BLOCK_SIZE",
            "MAX_ROWS",
            "MIN_ROWS",
            "PACK_KEYS",
            "PAGE_COMPRESSED",
            "PAGE_COMPRESSION_LEVEL",
            "ROW_FORMAT",
            "SEQUENCE",
            "STATS_AUTO_RECALC",
            "STATS_PERSISTENT",
            "STATS_SAMPLE_PAGES",
            "WITH_SYSTEM_VERSIONING",
        ],
    ),
    (
        "MyISAM",
        &[
            "AUTO_INCREMENT",
            "AVG_ROW_LENGTH",
            "CHECKSUM",
            "DATA_DIRECTORY",
            "DELAY_KEY_WRITE",
            "INDEX_DIRECTORY",
            "KEY_BLOCK_SIZE",
            "MAX_ROWS",
            "MIN_ROWS",
            "PACK_KEYS",
            "ROW_FORMAT",
            "WITH_SYSTEM_VERSIONING",
        ],
    ),
    (
        "Aria",
        &[
            "AUTO_INCREMENT",
            "AVG_ROW_LENGTH",
            "CHECKSUM",
            "DATA_DIRECTORY",
            "DELAY_KEY_WRITE",
            "INDEX_DIRECTORY",
            "KEY_BLOCK_SIZE",
            "MAX_ROWS",
            "MIN_ROWS",
            "PACK_KEYS",
            "PAGE_CHECKSUM",
            "ROW_FORMAT",
            "TRANSACTIONAL",
            "WITH_SYSTEM_VERSIONING",
        ],
    ),
    (
        "MEMORY",
        &[
            "AUTO_INCREMENT",
            "KEY_BLOCK_SIZE",
            "MAX_ROWS",
            "MIN_ROWS",
            "WITH_SYSTEM_VERSIONING",
        ],
    ),
    (
        "MERGE",
        &[
            "CHECKSUM",
            "DELAY_KEY_WRITE",
            "INSERT_METHOD",
            "ROW_FORMAT",
            "UNION",
        ],
    ),
    (
        "ARCHIVE",
        &["AUTO_INCREMENT", "AVG_ROW_LENGTH", "MAX_ROWS", "MIN_ROWS"],
    ),
    ("CSV", &["IETF_QUOTES"]),
    ("BLACKHOLE", &["KEY_BLOCK_SIZE"]),
    ("CONNECT", &["CONNECTION", "AVG_ROW_LENGTH", "MAX_ROWS"]),
    ("FEDERATED", &["CONNECTION"]),
];

fn default_fallback() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCatalog {
    pub tokens: IndexMap<String, String>,
    pub engines: IndexMap<String, Vec<String>>,
    #[serde(default = "default_fallback")]
    pub fallback: Vec<String>,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::mariadb()
    }
}

impl OptionCatalog {
    /// 内置的 MariaDB 选项表。
    pub fn mariadb() -> Self {
        let tokens = MARIADB_TOKENS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let engines = MARIADB_ENGINES
            .iter()
            .map(|(engine, keywords)| {
                (
                    engine.to_string(),
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        Self {
            tokens,
            engines,
            fallback: default_fallback(),
        }
    }

    /// 从 JSON 加载自定义选项表，并校验每个关键字都有对应的 SQL 选项名。
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let listed = self
            .engines
            .iter()
            .flat_map(|(engine, keywords)| keywords.iter().map(move |k| (engine.as_str(), k)))
            .chain(self.fallback.iter().map(|k| ("<fallback>", k)));
        for (engine, keyword) in listed {
            if !self.tokens.contains_key(keyword) {
                return Err(CatalogError::MissingToken {
                    engine: engine.to_string(),
                    keyword: keyword.clone(),
                });
            }
        }
        Ok(())
    }

    /// 解析引擎的有序关键字列表；引擎缺失或未登记时返回默认列表。
    pub fn keywords_for(&self, engine: Option<&str>) -> &[String] {
        let Some(engine) = engine.filter(|e| !e.is_empty()) else {
            return &self.fallback;
        };
        match self.engines.get(engine) {
            Some(keywords) => keywords,
            None => {
                tracing::debug!(engine, "unknown storage engine, using fallback option keywords");
                &self.fallback
            }
        }
    }

    /// SQL 选项名；未登记的关键字原样返回。
    pub fn token<'a>(&'a self, keyword: &'a str) -> &'a str {
        self.tokens.get(keyword).map(String::as_str).unwrap_or(keyword)
    }
}

/// 进程内共享的只读 MariaDB 选项表。
pub fn default_catalog() -> &'static OptionCatalog {
    static CATALOG: OnceLock<OptionCatalog> = OnceLock::new();
    CATALOG.get_or_init(OptionCatalog::mariadb)
}
