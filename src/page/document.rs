use indexmap::IndexMap;

use crate::helpers::html_escape;

/// One `<option>` of a select element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    /// The leading "match everything" option
    pub fn all(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// A slot on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub html: String,
    pub hidden: bool,
    pub options: Vec<SelectOption>,
}

/// The `<html>` element
#[derive(Debug, Clone, Default)]
pub struct Root {
    pub attributes: IndexMap<String, String>,
    pub transitions_suppressed: bool,
}

impl Root {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// A page: document title, root element, and its declared slots
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    pub root: Root,
    elements: IndexMap<&'static str, Element>,
}

impl Document {
    pub fn new(title: &str, ids: &[&'static str]) -> Self {
        Self {
            title: title.to_string(),
            root: Root::default(),
            elements: ids.iter().map(|&id| (id, Element::default())).collect(),
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.html.as_str())
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| e.hidden)
    }

    pub fn set_html(&mut self, id: &str, html: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.html = html.into();
        }
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        self.set_html(id, html_escape(text));
    }

    pub fn append_html(&mut self, id: &str, html: &str) {
        if let Some(element) = self.element_mut(id) {
            element.html.push_str(html);
        }
    }

    pub fn show(&mut self, id: &str) {
        if let Some(element) = self.element_mut(id) {
            element.hidden = false;
        }
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(element) = self.element_mut(id) {
            element.hidden = true;
        }
    }

    pub fn set_options(&mut self, id: &str, options: Vec<SelectOption>) {
        if let Some(element) = self.element_mut(id) {
            element.options = options;
        }
    }

    /// Serialize the page for display
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html");
        for (name, value) in &self.root.attributes {
            out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
        }
        out.push_str(">\n<head><meta charset=\"utf-8\"><title>");
        out.push_str(&html_escape(&self.title));
        out.push_str("</title></head>\n<body>\n");

        for (id, element) in &self.elements {
            let hidden = if element.hidden { " hidden" } else { "" };
            if element.options.is_empty() {
                out.push_str(&format!(
                    "<div id=\"{}\"{}>{}</div>\n",
                    id, hidden, element.html
                ));
            } else {
                out.push_str(&format!("<select id=\"{}\"{}>", id, hidden));
                for option in &element.options {
                    out.push_str(&format!(
                        r#"<option value="{}">{}</option>"#,
                        html_escape(&option.value),
                        html_escape(&option.label)
                    ));
                }
                out.push_str("</select>\n");
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ids;

    #[test]
    fn test_missing_slot_is_noop() {
        let mut doc = Document::new("t", &[ids::POSTS_GRID]);
        doc.set_html(ids::POST_CONTENT, "<p>x</p>");
        doc.hide(ids::LOADING);
        assert!(!doc.has(ids::POST_CONTENT));
        assert_eq!(doc.html(ids::POST_CONTENT), None);
    }

    #[test]
    fn test_set_text_escapes() {
        let mut doc = Document::new("t", &[ids::POST_TITLE]);
        doc.set_text(ids::POST_TITLE, "<b>x</b>");
        assert_eq!(doc.html(ids::POST_TITLE), Some("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_list_page_layout() {
        let doc = Document::list_page("Blog");
        assert!(doc.has(ids::POSTS_GRID));
        assert!(doc.is_hidden(ids::NO_POSTS));
        assert_eq!(doc.element(ids::TAG_FILTER).unwrap().options.len(), 1);
        assert!(!doc.has(ids::POST_CONTENT));
    }

    #[test]
    fn test_to_html() {
        let mut doc = Document::new("A & B", &[ids::POSTS_COUNT, ids::TAG_FILTER]);
        doc.root.set_attribute("data-theme", "dark");
        doc.set_text(ids::POSTS_COUNT, "3 posts");
        doc.set_options(ids::TAG_FILTER, vec![SelectOption::all("All"), SelectOption::new("go")]);

        let html = doc.to_html();
        assert!(html.contains(r#"<html data-theme="dark">"#));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<div id="postsCount">3 posts</div>"#));
        assert!(html.contains(r#"<option value="go">go</option>"#));
    }
}
