//! Validated form glue for the add-category and add-component modals.
//!
//! Validation happens before any request is issued; a failed validation
//! leaves the form fields untouched so the user can correct and resubmit.

use snipvault_common::{Fragments, NewCategory, NewComponent};
use thiserror::Error;

/// Icon token used when the category form leaves the icon blank.
pub const DEFAULT_CATEGORY_ICON: &str = "fas fa-folder";

/// Validation errors, worded as the transient user-facing notices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Category name is required")]
    CategoryNameRequired,

    #[error("Component name is required")]
    ComponentNameRequired,

    #[error("HTML code is required")]
    MarkupRequired,
}

/// Raw field state of the add-category modal.
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl CategoryForm {
    /// Produce the request payload, or a validation error with no request
    /// issued.
    pub fn validate(&self) -> Result<NewCategory, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::CategoryNameRequired);
        }
        Ok(NewCategory {
            name: self.name.clone(),
            icon: if self.icon.is_empty() {
                DEFAULT_CATEGORY_ICON.to_string()
            } else {
                self.icon.clone()
            },
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
        })
    }
}

/// Raw field state of the add-component modal. Tags are the free-text
/// comma-separated field as typed.
#[derive(Debug, Clone, Default)]
pub struct ComponentForm {
    pub name: String,
    pub description: String,
    pub category_id: u32,
    pub markup: String,
    pub style: String,
    pub script: String,
    pub tags: String,
}

impl ComponentForm {
    pub fn validate(&self) -> Result<NewComponent, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::ComponentNameRequired);
        }
        if self.markup.trim().is_empty() {
            return Err(FormError::MarkupRequired);
        }
        Ok(NewComponent {
            name: self.name.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            category_id: self.category_id,
            fragments: Fragments::new(&self.markup, &self.style, &self.script),
            tags: parse_tags(&self.tags),
        })
    }
}

/// Parse the comma-separated tags field: split, trim, drop empties.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
