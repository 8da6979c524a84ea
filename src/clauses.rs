//! 子句收集与拼接：空子句自动跳过，全部为空时输出空串。

#[derive(Debug, Default, Clone)]
pub(crate) struct Clauses {
    items: Vec<String>,
}

impl Clauses {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 追加一个子句；空串会被忽略。
    pub(crate) fn push(&mut self, clause: impl Into<String>) {
        let clause = clause.into();
        if !clause.is_empty() {
            self.items.push(clause);
        }
    }

    pub(crate) fn push_opt(&mut self, clause: Option<String>) {
        if let Some(c) = clause {
            self.push(c);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// 以 `sep` 拼接并加上 `prefix`；没有子句时返回空串。
    pub(crate) fn join_prefixed(self, prefix: &str, sep: &str) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let mut out = String::from(prefix);
        out.push_str(&self.items.join(sep));
        out
    }
}

/// 空串与 `None` 一样视为未设置。
pub(crate) fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Clauses, non_empty};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_clauses_render_nothing() {
        let mut c = Clauses::new();
        c.push("");
        c.push_opt(None);
        assert!(c.is_empty());
        assert_eq!(c.join_prefixed(" ", ", "), "");
    }

    #[test]
    fn join_with_prefix() {
        let mut c = Clauses::new();
        c.push("a");
        c.push("");
        c.push_opt(Some("b".to_string()));
        assert_eq!(c.join_prefixed("\n\t", "\n\t"), "\n\ta\n\tb");
    }

    #[test]
    fn non_empty_treats_blank_as_unset() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }
}
