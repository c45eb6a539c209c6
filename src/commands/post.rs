//! Show a single post

use anyhow::Result;

use super::apply_theme;
use crate::content::{LoadState, Post, PostLoader, PostQuery, PostView};
use crate::page::Document;
use crate::BlogViewer;

/// Pick the query: a full page URL wins over a bare file name
pub(crate) fn query_for(file: Option<&str>, url: Option<&str>) -> PostQuery {
    match (url, file) {
        (Some(url), _) => PostQuery::from_url(url),
        (None, Some(file)) => PostQuery::for_file(file),
        (None, None) => PostQuery::from_url(""),
    }
}

pub async fn run(
    viewer: &BlogViewer,
    file: Option<&str>,
    url: Option<&str>,
    html: bool,
) -> Result<()> {
    let source = viewer.source()?;
    let templates = viewer.templates()?;
    let view = PostView::new(&viewer.config, &templates);
    let loader = PostLoader::new(&source, &viewer.config);

    let mut doc = Document::post_page(&viewer.config.site_title);
    view.render(&mut doc, &LoadState::Loading)?;

    let state = loader.open(&query_for(file, url)).await;
    view.render(&mut doc, &state)?;

    if html {
        apply_theme(viewer, &mut doc);
        println!("{}", doc.to_html());
    } else if let LoadState::Rendered(post) = &state {
        print!("{}", format_post(post, |date| templates.format_date(date)));
    }

    match state {
        LoadState::Failed(e) => Err(e.into()),
        _ => Ok(()),
    }
}

fn format_post<F>(post: &Post, format_date: F) -> String
where
    F: Fn(&str) -> String,
{
    let meta = &post.meta;
    let mut out = format!("{}\n", meta.title);
    out.push_str(&format!("{}\n", format_date(&meta.date)));
    if let Some(category) = &meta.category {
        out.push_str(&format!("Category: {}\n", category));
    }
    if !meta.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", meta.tags.join(", ")));
    }
    out.push('\n');
    out.push_str(&post.content);
    if !post.content.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, PostError, PostMeta};

    #[test]
    fn test_query_for() {
        let query = query_for(Some("a.md"), Some("post.html?file=b.md"));
        assert_eq!(query.file().unwrap(), "b.md");
        assert_eq!(query_for(Some("a.md"), None).file().unwrap(), "a.md");
        assert!(matches!(
            query_for(None, None).file(),
            Err(PostError::NoFileSpecified)
        ));
    }

    #[test]
    fn test_format_post() {
        let mut meta = PostMeta::new("rust.md", "Rust Ownership");
        meta.date = "2024-01-15".to_string();
        meta.tags = vec!["rust".to_string(), "memory".to_string()];
        let post = Post::merge(meta, FrontMatter::default(), "Moves and borrows");

        assert_eq!(
            format_post(&post, |d| d.to_string()),
            "Rust Ownership\n2024-01-15\nTags: rust, memory\n\nMoves and borrows\n"
        );
    }
}
