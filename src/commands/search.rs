//! Ranked search, one-shot or interactive from stdin

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::list::plain_count;
use crate::page::Document;
use crate::search::{Debouncer, InputEvent, SearchController, SearchIndex, SearchOutcome};
use crate::BlogViewer;

pub async fn run(viewer: &BlogViewer, query: Option<&str>, interactive: bool) -> Result<()> {
    let source = viewer.source()?;
    let templates = viewer.templates()?;

    let mut controller = SearchController::new(&templates);
    let index = SearchIndex::load(&source, &viewer.config.posts_file).await;
    tracing::debug!("Search index ready with {} posts", index.len());
    controller.initialize(index);

    let mut doc = Document::list_page(&viewer.config.site_title);

    if let Some(query) = query {
        controller.perform_search(&mut doc, query)?;
        print_results(&controller, query, &doc);
    }

    if !interactive {
        return Ok(());
    }

    println!("Type to search; prefix a line with / to search immediately. Ctrl+D to quit.");
    let (tx, rx) = mpsc::channel(16);
    let debouncer = Debouncer::from_millis(viewer.config.search.debounce_ms);
    let queries = debouncer.spawn(rx);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(input_event(&line)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    controller
        .run(&mut doc, queries, |query, doc| {
            print_results(&controller, query, doc)
        })
        .await?;

    Ok(())
}

/// A stdin line as a search box event
pub(crate) fn input_event(line: &str) -> InputEvent {
    match line.strip_prefix('/') {
        Some(rest) => InputEvent::Submitted(rest.to_string()),
        None => InputEvent::Changed(line.to_string()),
    }
}

fn print_results(controller: &SearchController<'_>, query: &str, doc: &Document) {
    println!("{}", plain_count(doc));
    let Some(index) = controller.index() else {
        return;
    };
    if let SearchOutcome::Hits(hits) = index.search(query) {
        for hit in hits {
            println!("  {:>3}  {} [{}]", hit.score, hit.post.title, hit.post.file);
        }
    }
}
