//! List the catalog, optionally searched and filtered

use anyhow::Result;

use super::apply_theme;
use crate::catalog::{Catalog, CatalogController, Criteria};
use crate::content::PostMeta;
use crate::helpers::html_unescape;
use crate::page::{ids, Document};
use crate::BlogViewer;

/// Render the list page for the given criteria
pub async fn run(viewer: &BlogViewer, criteria: &Criteria, html: bool) -> Result<()> {
    let source = viewer.source()?;
    let templates = viewer.templates()?;
    let catalog = Catalog::load(&source, &viewer.config.posts_file).await;

    let mut doc = Document::list_page(&viewer.config.site_title);
    let mut controller = CatalogController::new(catalog, &templates);
    controller.mount(&mut doc)?;
    controller.handle_criteria(&mut doc, criteria)?;

    if html {
        apply_theme(viewer, &mut doc);
        println!("{}", doc.to_html());
        return Ok(());
    }

    let posts: Vec<&PostMeta> = controller.view().posts().collect();
    print!("{}", format_listing(&posts, |date| templates.format_date(date)));
    println!("{}", plain_count(&doc));

    let catalog = controller.catalog();
    if !catalog.categories().is_empty() {
        println!("Categories: {}", catalog.categories().join(", "));
    }
    if !catalog.tags().is_empty() {
        println!("Tags: {}", catalog.tags().join(", "));
    }

    Ok(())
}

/// One line per post: date, title, category, tags, file
pub(crate) fn format_listing<F>(posts: &[&PostMeta], format_date: F) -> String
where
    F: Fn(&str) -> String,
{
    if posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let mut out = String::new();
    for post in posts {
        out.push_str(&format!("  {} - {}", format_date(&post.date), post.title));
        if let Some(category) = &post.category {
            out.push_str(&format!(" ({})", category));
        }
        if !post.tags.is_empty() {
            out.push_str(&format!(" #{}", post.tags.join(" #")));
        }
        out.push_str(&format!(" [{}]\n", post.file));
    }
    out
}

/// The count label without HTML escaping
pub(crate) fn plain_count(doc: &Document) -> String {
    html_unescape(doc.html(ids::POSTS_COUNT).unwrap_or_default())
}
