//! Relevance-scored search over a prebuilt index

use crate::catalog::Catalog;
use crate::content::PostMeta;
use crate::source::AssetSource;

const TITLE_CONTAINS: u32 = 10;
const TITLE_STARTS_WITH: u32 = 5;
const TAG_CONTAINS: u32 = 8;
const CATEGORY_CONTAINS: u32 = 6;
const DESCRIPTION_CONTAINS: u32 = 4;
const TEXT_CONTAINS: u32 = 2;

/// A post with its searchable fields lowercased once up front
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub post: PostMeta,
    title: String,
    tags: Vec<String>,
    category: Option<String>,
    description: Option<String>,
    /// Title, excerpt, description, category, and tags joined by spaces
    text: String,
}

impl IndexEntry {
    pub fn new(post: PostMeta) -> Self {
        let text = searchable_text(&post);
        Self {
            title: post.title.to_lowercase(),
            tags: post.tags.iter().map(|t| t.to_lowercase()).collect(),
            category: post.category.as_deref().map(str::to_lowercase),
            description: post.description.as_deref().map(str::to_lowercase),
            text,
            post,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Points for one lowercase term; the term is matched literally
    pub fn score_term(&self, term: &str) -> u32 {
        let mut score = 0;

        if self.title.contains(term) {
            score += TITLE_CONTAINS;
        }
        if self.title.starts_with(term) {
            score += TITLE_STARTS_WITH;
        }
        if self.tags.iter().any(|tag| tag.contains(term)) {
            score += TAG_CONTAINS;
        }
        if self.category.as_deref().is_some_and(|c| c.contains(term)) {
            score += CATEGORY_CONTAINS;
        }
        if self.description.as_deref().is_some_and(|d| d.contains(term)) {
            score += DESCRIPTION_CONTAINS;
        }
        if self.text.contains(term) {
            score += TEXT_CONTAINS;
        }
        score += self.text.matches(term).count() as u32;

        score
    }

    pub fn score(&self, terms: &[String]) -> u32 {
        terms.iter().map(|term| self.score_term(term)).sum()
    }
}

fn searchable_text(post: &PostMeta) -> String {
    let mut parts: Vec<&str> = vec![
        &post.title,
        &post.excerpt,
        post.description.as_deref().unwrap_or(""),
        post.category.as_deref().unwrap_or(""),
    ];
    parts.extend(post.tags.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// One ranked result
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub post: &'a PostMeta,
    pub score: u32,
}

/// What a query asks for
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    /// Empty or whitespace-only query: show everything again
    Cleared,
    Hits(Vec<SearchHit<'a>>),
}

/// Immutable search index built once per page
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let entries: Vec<_> = catalog.posts().iter().cloned().map(IndexEntry::new).collect();
        tracing::debug!("Built search index with {} entries", entries.len());
        Self { entries }
    }

    /// Fetch the catalog on its own and index it; failures give an empty index
    pub async fn load<S: AssetSource>(source: &S, path: &str) -> Self {
        match Catalog::fetch(source, path).await {
            Ok(catalog) => Self::build(&catalog),
            Err(e) => {
                tracing::warn!("Failed to build search index: {}", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Rank posts for a space-separated query
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        let terms = split_terms(query);
        if terms.is_empty() {
            return SearchOutcome::Cleared;
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .map(|entry| SearchHit {
                post: &entry.post,
                score: entry.score(&terms),
            })
            .filter(|hit| hit.score > 0)
            .collect();

        // Stable: equal scores keep catalog order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        SearchOutcome::Hits(hits)
    }
}

pub fn split_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::post;

    fn hits<'a>(outcome: SearchOutcome<'a>) -> Vec<SearchHit<'a>> {
        match outcome {
            SearchOutcome::Hits(hits) => hits,
            SearchOutcome::Cleared => panic!("expected hits"),
        }
    }

    fn files(outcome: SearchOutcome<'_>) -> Vec<String> {
        hits(outcome).iter().map(|h| h.post.file.clone()).collect()
    }

    fn go_catalog() -> Catalog {
        let mut hiking = post("hike.md", "Weekend Plans", Some("Life"), &["outdoors"]);
        hiking.excerpt = "Let's go hiking".to_string();
        let mut rust = post("rust.md", "Rust Ownership", Some("Programming"), &["rust"]);
        rust.excerpt = "Borrowing rules".to_string();

        Catalog::new(vec![
            hiking,
            post("go.md", "Intro to Go", Some("Programming"), &["go"]),
            rust,
        ])
    }

    #[test]
    fn test_composite_text() {
        let mut meta = post("a.md", "Title", Some("Cat"), &["T1", "t2"]);
        meta.excerpt = "Excerpt".to_string();
        meta.description = Some("Desc".to_string());
        assert_eq!(IndexEntry::new(meta).text(), "title excerpt desc cat t1 t2");
    }

    #[test]
    fn test_score_weights() {
        let mut meta = post("a.md", "Go Fast", Some("golang"), &["go"]);
        meta.excerpt = String::new();
        meta.description = Some("go go".to_string());
        let entry = IndexEntry::new(meta);
        // text: "go fast  go go golang go"
        // title 10 + starts 5 + tag 8 + category 6 + description 4 + text 2 + 5 occurrences
        assert_eq!(entry.score_term("go"), 40);
        assert_eq!(entry.score_term("zzz"), 0);
    }

    #[test]
    fn test_title_and_tag_outrank_excerpt_mention() {
        let index = SearchIndex::build(&go_catalog());
        assert_eq!(files(index.search("go")), vec!["go.md", "hike.md"]);
    }

    #[test]
    fn test_multi_term_scores_sum() {
        let index = SearchIndex::build(&go_catalog());
        let single = hits(index.search("rust"))[0].score;
        let both = hits(index.search("rust borrowing"));
        assert_eq!(both[0].post.file, "rust.md");
        assert!(both[0].score > single);
    }

    #[test]
    fn test_appending_term_never_lowers_score() {
        let index = SearchIndex::build(&go_catalog());
        for entry in index.entries() {
            let before = entry.score(&split_terms("go"));
            let after = entry.score(&split_terms("go programming"));
            assert!(after >= before);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            post("b.md", "Same", None, &[]),
            post("a.md", "Same", None, &[]),
        ]);
        let index = SearchIndex::build(&catalog);
        assert_eq!(files(index.search("same")), vec!["b.md", "a.md"]);
    }

    #[test]
    fn test_blank_query_clears() {
        let index = SearchIndex::build(&go_catalog());
        assert!(matches!(index.search("   "), SearchOutcome::Cleared));
        assert!(matches!(index.search(""), SearchOutcome::Cleared));
    }

    #[test]
    fn test_no_match_is_empty_hits() {
        let index = SearchIndex::build(&go_catalog());
        assert!(hits(index.search("kubernetes")).is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let catalog = Catalog::new(vec![post("cpp.md", "C++ tips (part 1)", None, &[])]);
        let index = SearchIndex::build(&catalog);

        assert_eq!(files(index.search("c++")), vec!["cpp.md"]);
        assert_eq!(files(index.search("(part")), vec!["cpp.md"]);
        assert!(hits(index.search(".*")).is_empty());
        assert!(hits(index.search("[")).is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_gives_empty_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = crate::source::DirSource::new(dir.path());
        let index = SearchIndex::load(&source, "posts.json").await;
        assert!(index.is_empty());
    }
}
