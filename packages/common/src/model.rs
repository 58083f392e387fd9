//! Domain model shared across all snipvault crates.
//!
//! A [`Component`] is a stored reusable snippet: three source fragments
//! (markup/style/script) plus metadata, owned by a [`Category`]. The wire
//! format uses the legacy field names (`html`/`css`/`js`, camelCase keys)
//! so existing clients keep working.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three source fragments of a component.
///
/// Any string is a valid fragment, including syntactically broken ones.
/// Only the markup fragment is required to be non-empty at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragments {
    #[serde(rename = "html")]
    pub markup: String,

    #[serde(rename = "css", default)]
    pub style: String,

    #[serde(rename = "js", default)]
    pub script: String,
}

impl Fragments {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
        }
    }

    /// Get one fragment by kind.
    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Markup => &self.markup,
            FragmentKind::Style => &self.style,
            FragmentKind::Script => &self.script,
        }
    }

    /// Replace one fragment by kind.
    pub fn set(&mut self, kind: FragmentKind, text: String) {
        match kind {
            FragmentKind::Markup => self.markup = text,
            FragmentKind::Style => self.style = text,
            FragmentKind::Script => self.script = text,
        }
    }
}

/// Selects one member of the fragment triple. Also serves as the editor's
/// active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    #[serde(rename = "html")]
    Markup,
    #[serde(rename = "css")]
    Style,
    #[serde(rename = "js")]
    Script,
}

/// A named grouping of components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Opaque icon token (FontAwesome class in the stock UI).
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Derived by the store at listing time, never persisted.
    #[serde(default)]
    pub component_count: u32,
}

/// A stored reusable snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: u32,
    #[serde(flatten)]
    pub fragments: Fragments,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating a category. Produced by the category form after
/// validation; the icon is already defaulted at this point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a component. Tags are already parsed from the
/// free-text form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComponent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category_id: u32,
    #[serde(flatten)]
    pub fragments: Fragments,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial fragment update, keyed by component id at the call site.
/// Absent members leave the stored fragment untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentPatch {
    #[serde(rename = "html", default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,

    #[serde(rename = "css", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(rename = "js", default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl FragmentPatch {
    /// A patch carrying every fragment of `fragments`.
    pub fn full(fragments: &Fragments) -> Self {
        Self {
            markup: Some(fragments.markup.clone()),
            style: Some(fragments.style.clone()),
            script: Some(fragments.script.clone()),
        }
    }

    /// Apply this patch on top of existing fragments.
    pub fn apply_to(&self, fragments: &mut Fragments) {
        if let Some(markup) = &self.markup {
            fragments.markup = markup.clone();
        }
        if let Some(style) = &self.style {
            fragments.style = style.clone();
        }
        if let Some(script) = &self.script {
            fragments.script = script.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_round_trip_legacy_field_names() {
        let fragments = Fragments::new("<b>hi</b>", ".x {}", "let a = 1;");
        let json = serde_json::to_value(&fragments).unwrap();

        assert_eq!(json["html"], "<b>hi</b>");
        assert_eq!(json["css"], ".x {}");
        assert_eq!(json["js"], "let a = 1;");
    }

    #[test]
    fn component_serializes_flat_wire_shape() {
        let component = Component {
            id: 7,
            name: "Pill".to_string(),
            description: None,
            category_id: 2,
            fragments: Fragments::new("<span>X</span>", "", ""),
            tags: vec!["badge".to_string()],
            active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&component).unwrap();
        // Fragments flatten into the component object, camelCase elsewhere.
        assert_eq!(json["html"], "<span>X</span>");
        assert_eq!(json["categoryId"], 2);
        assert!(json.get("fragments").is_none());
    }

    #[test]
    fn patch_applies_only_present_members() {
        let mut fragments = Fragments::new("<a>", "old", "old");
        let patch = FragmentPatch {
            markup: None,
            style: Some("new".to_string()),
            script: None,
        };

        patch.apply_to(&mut fragments);
        assert_eq!(fragments.markup, "<a>");
        assert_eq!(fragments.style, "new");
        assert_eq!(fragments.script, "old");
    }

    #[test]
    fn fragment_kind_selects_members() {
        let mut fragments = Fragments::new("m", "s", "j");
        assert_eq!(fragments.get(FragmentKind::Style), "s");

        fragments.set(FragmentKind::Script, "j2".to_string());
        assert_eq!(fragments.script, "j2");
    }
}
