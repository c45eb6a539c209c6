//! Giscus comment widget

use crate::helpers::html_escape;
use crate::page::{ids, Document};

const CLIENT_SRC: &str = "https://giscus.app/client.js";

/// The repository discussion board that holds the comments
const ATTRIBUTES: &[(&str, &str)] = &[
    ("data-repo", "seokh0123-svg/seokh0123-svg.github.io"),
    ("data-repo-id", "R_kgDOKjQqJQ"),
    ("data-category", "General"),
    ("data-category-id", "DIC_kwDOKjQqJc4Cb8YJ"),
    ("data-mapping", "pathname"),
    ("data-strict", "0"),
    ("data-reactions-enabled", "1"),
    ("data-emit-metadata", "1"),
    ("data-input-position", "bottom"),
    ("data-theme", "preferred_color_scheme"),
    ("data-lang", "ko"),
    ("data-loading", "lazy"),
    ("crossorigin", "anonymous"),
];

/// The `<script>` tag that boots the widget
pub fn giscus_script() -> String {
    let mut tag = format!("<script src=\"{}\"", CLIENT_SRC);
    for (name, value) in ATTRIBUTES {
        tag.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
    }
    tag.push_str(" async></script>");
    tag
}

/// Append the widget to the comments slot once, if the page has one
pub fn mount_comments(doc: &mut Document) {
    let mounted = doc
        .html(ids::COMMENTS)
        .is_some_and(|html| html.contains(CLIENT_SRC));
    if doc.has(ids::COMMENTS) && !mounted {
        doc.append_html(ids::COMMENTS, &giscus_script());
    }
}
