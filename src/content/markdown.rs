//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::MarkdownConfig;
use crate::helpers::html_escape;

/// Markdown renderer with an optional highlighting pass
pub struct MarkdownRenderer {
    breaks: bool,
    raw_html: bool,
    highlighter: Option<Highlighter>,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            breaks: true,
            raw_html: false,
            highlighter: Some(Highlighter::new("base16-ocean.dark")),
        }
    }

    /// Create from the `markdown` config section
    pub fn from_config(config: &MarkdownConfig) -> Self {
        Self {
            breaks: config.breaks,
            raw_html: config.raw_html,
            highlighter: config
                .highlight
                .then(|| Highlighter::new(&config.highlight_theme)),
        }
    }

    /// Drop the highlighting pass
    pub fn without_highlighting(mut self) -> Self {
        self.highlighter = None;
        self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front matter is split off before rendering, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;

        let events: Vec<Event> = Parser::new_ext(markdown, options)
            .map(|event| match event {
                Event::SoftBreak if self.breaks => Event::HardBreak,
                Event::Html(raw) | Event::InlineHtml(raw) if !self.raw_html => Event::Text(raw),
                other => other,
            })
            .collect();

        let events = match &self.highlighter {
            Some(highlighter) => highlighter.highlight_events(events),
            None => events,
        };

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback rendering when markdown is unavailable: escaped preformatted text
pub fn render_plain(markdown: &str) -> String {
    format!("<pre>{}</pre>", html_escape(markdown))
}

/// Syntax highlighting applied to fenced code blocks
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl Highlighter {
    pub fn new(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Replace every code block in an event stream with highlighted HTML
    pub fn highlight_events<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut output = Vec::with_capacity(events.len());
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.split_whitespace().next().unwrap_or("");
                            (!lang.is_empty()).then(|| lang.to_string())
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        output.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                other => output.push(other),
            }
        }

        output
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let plain = || {
            format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(lang),
                html_escape(code)
            )
        };

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self.theme() else {
            return plain();
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight language-{}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting failed for {}: {}", lang, e);
                plain()
            }
        }
    }
}
