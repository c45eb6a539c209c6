//! Page model - the document a component renders into
//!
//! Each page declares up front which element slots it has. Components look
//! slots up by id and treat a missing slot as nothing to render.

mod document;

pub use document::{Document, Element, Root, SelectOption};

/// Element ids shared by the page layouts
pub mod ids {
    pub const LOADING: &str = "loading";
    pub const THEME_ICON: &str = "themeIcon";

    // List page
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const CATEGORY_FILTER: &str = "categoryFilter";
    pub const TAG_FILTER: &str = "tagFilter";
    pub const POSTS_COUNT: &str = "postsCount";
    pub const POSTS_GRID: &str = "postsGrid";
    pub const NO_POSTS: &str = "noPosts";

    // Post page
    pub const PAGE_TITLE: &str = "pageTitle";
    pub const POST_TITLE: &str = "postTitle";
    pub const POST_DATE: &str = "postDate";
    pub const POST_TAGS: &str = "postTags";
    pub const POST_CONTENT: &str = "postContent";
    pub const COMMENTS: &str = "giscus-comments";
}

impl Document {
    /// The catalog page: search box, filters, grid
    pub fn list_page(site_title: &str) -> Self {
        let mut doc = Self::new(
            site_title,
            &[
                ids::THEME_ICON,
                ids::SEARCH_INPUT,
                ids::CATEGORY_FILTER,
                ids::TAG_FILTER,
                ids::POSTS_COUNT,
                ids::LOADING,
                ids::POSTS_GRID,
                ids::NO_POSTS,
            ],
        );
        doc.set_options(ids::CATEGORY_FILTER, vec![SelectOption::all("All categories")]);
        doc.set_options(ids::TAG_FILTER, vec![SelectOption::all("All tags")]);
        doc.set_text(ids::POSTS_COUNT, "All posts");
        doc.set_text(ids::NO_POSTS, "No posts found.");
        doc.hide(ids::NO_POSTS);
        doc
    }

    /// The single post viewer
    pub fn post_page(site_title: &str) -> Self {
        Self::new(
            site_title,
            &[
                ids::THEME_ICON,
                ids::LOADING,
                ids::PAGE_TITLE,
                ids::POST_TITLE,
                ids::POST_DATE,
                ids::POST_TAGS,
                ids::POST_CONTENT,
                ids::COMMENTS,
            ],
        )
    }
}
