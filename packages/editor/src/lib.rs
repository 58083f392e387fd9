//! # Snipvault Editor
//!
//! Client-side editing core for the snippet library.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ controller: selection + edit-mode state     │
//! │  - View/edit a component's fragments        │
//! │  - Draft buffer, save handshake             │
//! │  - Recompiles the preview on every change   │
//! └─────────────────────────────────────────────┘
//!            ↓                       ↓
//! ┌──────────────────────┐ ┌──────────────────────┐
//! │ preview: fragments → │ │ highlighter: code →  │
//! │ sandboxed document   │ │ decorated display    │
//! └──────────────────────┘ └──────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Saved state is the source of truth**: the draft is a transient
//!    copy, discarded on cancel, committed only when the collaborator
//!    acknowledges a save.
//! 2. **No stale preview**: the preview document is recomputed
//!    synchronously at the end of every transition and fragment edit.
//! 3. **One save in flight**: a second save is rejected until the
//!    collaborator confirms or rejects the first.
//!
//! The crate also carries the thin glue around the core: validated form
//! payloads ([`forms`]) and list filtering for the sidebar and component
//! grid ([`browser`]).

mod browser;
mod controller;
mod errors;
mod forms;

pub use browser::{filter_categories, filter_components, SidebarState, TagFilter};
pub use controller::{EditorController, EditorState, FragmentStore};
pub use errors::EditorError;
pub use forms::{parse_tags, CategoryForm, ComponentForm, FormError, DEFAULT_CATEGORY_ICON};

// Re-export common types for convenience
pub use snipvault_common::{Category, Component, FragmentKind, FragmentPatch, Fragments};
