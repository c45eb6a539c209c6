//! HTML helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inverse of [`html_escape`], for printing text slots to a terminal
pub fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Percent-encode a query value the way `encodeURIComponent` does
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Decode a query-string value (`+` is a space)
pub fn decode_query_value(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Look up a parameter in a URL or bare query string
///
/// # Examples
/// ```ignore
/// query_param("post.html?file=a%2Fb.md", "file") // -> Some("a/b.md")
/// ```
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let query = match url.split_once('?') {
        Some((_, q)) => q,
        None => url,
    };
    let query = query.split('#').next().unwrap_or("");

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_query_value(key) == name).then(|| decode_query_value(value))
    })
}
