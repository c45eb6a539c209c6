//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

const DELIMITER: &str = "---";

lazy_static! {
    /// One leading and one trailing quote on a list element
    static ref EDGE_QUOTES: Regex = Regex::new(r#"^['"]|['"]$"#).unwrap();
}

/// A front-matter value: plain text, or a list for `tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontValue {
    Text(String),
    List(Vec<String>),
}

impl FrontValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FrontValue::Text(s) => Some(s),
            FrontValue::List(_) => None,
        }
    }

    /// Read the value as a list; plain text is split on commas
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FrontValue::List(items) => items.clone(),
            FrontValue::Text(s) => s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Ordered `key: value` pairs from a document header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    fields: IndexMap<String, FrontValue>,
}

impl FrontMatter {
    /// Split a document into front matter and body
    ///
    /// The header is recognized only when the text opens with a `---` line,
    /// continues with non-blank lines, and closes with another `---` line.
    /// Anything else yields empty front matter and the whole text as body.
    pub fn parse(content: &str) -> (Self, &str) {
        match split_header(content) {
            Some((header, body)) => (Self::parse_header(header), body),
            None => (Self::default(), content),
        }
    }

    fn parse_header(header: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in header.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            let key = key.to_string();
            let value = strip_quotes(value.trim());

            let value = if key == "tags" && value.starts_with('[') && value.ends_with(']') {
                FrontValue::List(parse_tag_list(value))
            } else {
                FrontValue::Text(value.to_string())
            };

            fields.insert(key, value);
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FrontValue> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FrontValue)> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> IndexMap<String, FrontValue> {
        self.fields
    }
}

/// Locate the header block, returning (header, body)
fn split_header(content: &str) -> Option<(&str, &str)> {
    let rest = strip_delimiter_line(content)?;
    let mut offset = 0;

    loop {
        let remaining = &rest[offset..];
        let (line, consumed) = match remaining.find('\n') {
            Some(pos) => (&remaining[..pos], pos + 1),
            None => (remaining, remaining.len()),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line == DELIMITER {
            // An empty header is not a header
            if offset == 0 {
                return None;
            }
            let header = rest[..offset].trim_end_matches(['\n', '\r']);
            return Some((header, &remaining[consumed..]));
        }

        if line.trim().is_empty() || consumed == 0 || offset + consumed >= rest.len() {
            return None;
        }
        offset += consumed;
    }
}

/// Strip an opening `---` line, if present
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Remove one pair of matching surrounding quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse `[a, b]` as a JSON string list, or split it loosely on commas
fn parse_tag_list(value: &str) -> Vec<String> {
    if let Ok(items) = serde_json::from_str::<Vec<serde_json::Value>>(value) {
        return items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
    }

    value[1..value.len() - 1]
        .split(',')
        .map(|tag| EDGE_QUOTES.replace_all(tag.trim(), "").into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_body() {
        let (fm, body) = FrontMatter::parse("---\ntitle: \"Hello\"\n---\nWorld");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.text("title"), Some("Hello"));
        assert_eq!(body, "World");
    }

    #[test]
    fn test_no_header_returns_whole_input() {
        let content = "# Just markdown\n\nNo header here.";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let (fm, _) = FrontMatter::parse("---\nlink: https://example.com/a:b\ntime: 10:30\n---\n");
        assert_eq!(fm.text("link"), Some("https://example.com/a:b"));
        assert_eq!(fm.text("time"), Some("10:30"));
    }

    #[test]
    fn test_single_quotes_stripped_mismatched_kept() {
        let (fm, _) = FrontMatter::parse("---\na: 'one'\nb: \"two'\n---\nbody");
        assert_eq!(fm.text("a"), Some("one"));
        assert_eq!(fm.text("b"), Some("\"two'"));
    }

    #[test]
    fn test_tags_json_list() {
        let (fm, _) = FrontMatter::parse("---\ntags: [\"rust\", \"web\"]\n---\nbody");
        assert_eq!(
            fm.get("tags"),
            Some(&FrontValue::List(vec!["rust".into(), "web".into()]))
        );
    }

    #[test]
    fn test_tags_loose_list_fallback() {
        let (fm, _) = FrontMatter::parse("---\ntags: [rust, 'web', \"cli\"]\n---\nbody");
        assert_eq!(
            fm.get("tags"),
            Some(&FrontValue::List(vec![
                "rust".into(),
                "web".into(),
                "cli".into()
            ]))
        );
    }

    #[test]
    fn test_tags_plain_text_is_not_list() {
        let (fm, _) = FrontMatter::parse("---\ntags: rust, web\n---\nbody");
        assert_eq!(fm.get("tags"), Some(&FrontValue::Text("rust, web".into())));
        assert_eq!(fm.get("tags").unwrap().to_list(), vec!["rust", "web"]);
    }

    #[test]
    fn test_blank_line_in_header_is_not_front_matter() {
        let content = "---\ntitle: A\n\nmore: B\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_header_is_not_front_matter() {
        let content = "---\ntitle: A\nbody without closing";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_header_is_not_front_matter() {
        let content = "---\n---\nbody";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_crlf_and_closing_at_eof() {
        let (fm, body) = FrontMatter::parse("---\r\ntitle: Win\r\n---\r\nBody\r\n");
        assert_eq!(fm.text("title"), Some("Win"));
        assert_eq!(body, "Body\r\n");

        let (fm, body) = FrontMatter::parse("---\ntitle: Only\n---");
        assert_eq!(fm.text("title"), Some("Only"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_lines_without_key_are_skipped() {
        let (fm, _) = FrontMatter::parse("---\njust text\n: no key\ntitle: T\n---\n");
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.text("title"), Some("T"));
    }

    #[test]
    fn test_blank_key_before_colon_is_skipped() {
        let (fm, body) = FrontMatter::parse("---\n  : orphan\ntitle: T\n---\nbody");
        let keys: Vec<_> = fm.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["title"]);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_key_order_preserved() {
        let (fm, _) = FrontMatter::parse("---\nz: 1\na: 2\nm: 3\n---\n");
        let keys: Vec<_> = fm.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
