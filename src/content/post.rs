//! Post models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FrontMatter, FrontValue};

/// One entry of `posts.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Unique identifier, relative to the pages directory
    pub file: String,

    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// ISO-ish date string, formatted for display only
    #[serde(default)]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostMeta {
    pub fn new(file: &str, title: &str) -> Self {
        Self {
            file: file.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            date: String::new(),
            category: None,
            tags: Vec::new(),
            description: None,
        }
    }
}

/// A fully loaded post: catalog metadata merged with its front matter
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,

    /// Front-matter keys with no catalog counterpart
    #[serde(flatten)]
    pub extra: IndexMap<String, FrontValue>,

    /// Raw markdown body
    pub content: String,
}

impl Post {
    /// Merge front matter over catalog metadata; front matter wins on conflict
    pub fn merge(meta: PostMeta, front_matter: FrontMatter, content: &str) -> Self {
        let mut meta = meta;
        let mut extra = IndexMap::new();

        for (key, value) in front_matter.into_fields() {
            match key.as_str() {
                "tags" => meta.tags = value.to_list(),
                "title" => meta.title = flatten_text(value),
                "excerpt" => meta.excerpt = flatten_text(value),
                "date" => meta.date = flatten_text(value),
                "category" => meta.category = Some(flatten_text(value)),
                "description" => meta.description = Some(flatten_text(value)),
                // `file` included: the identifier always comes from the catalog
                _ => {
                    extra.insert(key, value);
                }
            }
        }

        Self {
            meta,
            extra,
            content: content.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }
}

fn flatten_text(value: FrontValue) -> String {
    match value {
        FrontValue::Text(s) => s,
        FrontValue::List(items) => items.join(", "),
    }
}
