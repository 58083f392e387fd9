//! List filtering glue for the sidebar and the component grid.
//!
//! All of this is transient UI state; none of it survives a reload.

use snipvault_common::{Category, Component};

/// Transient sidebar state: collapse flag plus the search box text.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    pub search: String,
}

impl SidebarState {
    pub fn toggle_collapse(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

/// Component grid filter: everything, or one named tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

/// Case-insensitive sidebar search over category names. An empty query
/// passes everything through in order.
pub fn filter_categories<'a>(categories: &'a [Category], query: &str) -> Vec<&'a Category> {
    let query = query.trim().to_lowercase();
    categories
        .iter()
        .filter(|category| query.is_empty() || category.name.to_lowercase().contains(&query))
        .collect()
}

/// Tag filter over the component grid. Matching is case-insensitive
/// against the component's tag set.
pub fn filter_components<'a>(components: &'a [Component], filter: &TagFilter) -> Vec<&'a Component> {
    components
        .iter()
        .filter(|component| match filter {
            TagFilter::All => true,
            TagFilter::Tag(tag) => component
                .tags
                .iter()
                .any(|t| t.eq_ignore_ascii_case(tag)),
        })
        .collect()
}
