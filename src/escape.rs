//! 字面量转义：两套规则分别服务于表注释与例程注释，不要合并。

/// 单引号，`wrap` 的默认定界符。
pub const QUOTE: &str = "'";

/// 用 `open`/`close` 包裹文本，不做任何转义。
pub fn wrap(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.push_str(open);
    out.push_str(text);
    out.push_str(close);
    out
}

/// 以单引号包裹：`abc` -> `'abc'`。
pub fn wrap_quoted(text: &str) -> String {
    wrap(text, QUOTE, QUOTE)
}

/// 为未转义的 `'`、`"`、`` ` `` 加反斜杠前缀，并把换行替换为 `\n` 两个字符。
///
/// 判断“已转义”只看原文中紧邻的前一个字符是否为反斜杠。
pub fn escape_for_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        match c {
            '\'' | '"' | '`' if prev != Some('\\') => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
        prev = Some(c);
    }
    out
}

/// 把单引号加倍（`'` -> `''`），换行替换为 `\n`。
pub fn escape_quotes(s: &str) -> String {
    s.replace('\'', "''").replace('\n', "\\n")
}

/// `Option` 版本：`None` 视为空串。
pub fn escape_for_literal_opt(s: Option<&str>) -> String {
    escape_for_literal(s.unwrap_or_default())
}

pub fn escape_quotes_opt(s: Option<&str>) -> String {
    escape_quotes(s.unwrap_or_default())
}
