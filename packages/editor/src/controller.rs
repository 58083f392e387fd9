//! # Editor State Controller
//!
//! Mediates between a selected component, an active/inactive edit mode,
//! and the two pure functions (preview compiler, highlighter).
//!
//! States and transitions:
//!
//! ```text
//! NoSelection ──select──▶ Viewing ──begin_edit──▶ Editing
//!      ▲                    │  ▲                    │
//!      └─────deselect───────┘  └───cancel_edit──────┤
//!                              └──save→confirm──────┘
//! ```
//!
//! The preview always reflects the current intent: saved fragments while
//! viewing, the draft while editing. Recompilation happens synchronously
//! at the end of every transition and every fragment edit, so there is no
//! stale-preview window.
//!
//! Saving is a two-phase handshake mirroring a single in-flight network
//! request: [`EditorController::save`] yields the payload and marks the
//! request pending, then either [`EditorController::confirm_save`] commits
//! the draft or [`EditorController::reject_save`] keeps the draft intact
//! for a manual retry. [`EditorController::save_with`] drives both phases
//! against a [`FragmentStore`] in one call.

use snipvault_common::{Component, FragmentKind, FragmentPatch, Fragments, StoreError};
use snipvault_highlighter::{highlight, Language};
use snipvault_preview::compile;

use crate::EditorError;

/// Persistence collaborator seam. Implemented by the workspace store and
/// by test fakes.
pub trait FragmentStore {
    /// Apply a partial fragment update and return the updated component.
    fn update_fragments(
        &mut self,
        id: u32,
        patch: &FragmentPatch,
    ) -> Result<Component, StoreError>;
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    NoSelection,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Viewing,
    Editing { save_in_flight: bool },
}

#[derive(Debug, Clone)]
struct Selection {
    component: Component,
    /// Copy of the saved fragments, kept ready so editing can begin
    /// without a round-trip; only authoritative while editing.
    draft: Fragments,
    mode: Mode,
}

/// Owns selection, edit mode, draft buffers and the compiled preview.
#[derive(Debug, Clone)]
pub struct EditorController {
    selection: Option<Selection>,
    active_tab: FragmentKind,
    preview: Option<String>,
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorController {
    pub fn new() -> Self {
        Self {
            selection: None,
            active_tab: FragmentKind::Markup,
            preview: None,
        }
    }

    pub fn state(&self) -> EditorState {
        match &self.selection {
            None => EditorState::NoSelection,
            Some(s) => match s.mode {
                Mode::Viewing => EditorState::Viewing,
                Mode::Editing { .. } => EditorState::Editing,
            },
        }
    }

    /// The currently selected component, if any.
    pub fn selected(&self) -> Option<&Component> {
        self.selection.as_ref().map(|s| &s.component)
    }

    /// The compiled preview document. `None` only while nothing is
    /// selected.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn active_tab(&self) -> FragmentKind {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: FragmentKind) {
        self.active_tab = tab;
    }

    /// Select a component for viewing. Replaces any previous selection
    /// and drops any previous draft.
    pub fn select(&mut self, component: Component) {
        self.selection = Some(Selection {
            draft: component.fragments.clone(),
            component,
            mode: Mode::Viewing,
        });
        self.recompile();
    }

    /// Clear the selection from any state.
    pub fn deselect(&mut self) {
        self.selection = None;
        self.recompile();
    }

    /// Enter edit mode. The draft starts as a fresh copy of the saved
    /// fragments.
    pub fn begin_edit(&mut self) -> Result<(), EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match selection.mode {
            Mode::Editing { .. } => return Err(EditorError::AlreadyEditing),
            Mode::Viewing => {
                selection.draft = selection.component.fragments.clone();
                selection.mode = Mode::Editing {
                    save_in_flight: false,
                };
            }
        }
        self.recompile();
        Ok(())
    }

    /// Leave edit mode, discarding the draft.
    pub fn cancel_edit(&mut self) -> Result<(), EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match selection.mode {
            Mode::Viewing => return Err(EditorError::NotEditing),
            Mode::Editing {
                save_in_flight: true,
            } => return Err(EditorError::SaveInFlight),
            Mode::Editing {
                save_in_flight: false,
            } => {
                selection.draft = selection.component.fragments.clone();
                selection.mode = Mode::Viewing;
            }
        }
        self.recompile();
        Ok(())
    }

    /// Replace a single fragment of the draft.
    pub fn edit_fragment(&mut self, kind: FragmentKind, text: String) -> Result<(), EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match selection.mode {
            Mode::Viewing => return Err(EditorError::NotEditing),
            Mode::Editing {
                save_in_flight: true,
            } => return Err(EditorError::SaveInFlight),
            Mode::Editing {
                save_in_flight: false,
            } => selection.draft.set(kind, text),
        }
        self.recompile();
        Ok(())
    }

    /// Begin the save handshake: marks a request in flight and yields the
    /// payload for the persistence collaborator. A second call before
    /// [`confirm_save`](Self::confirm_save) or
    /// [`reject_save`](Self::reject_save) is rejected.
    pub fn save(&mut self) -> Result<FragmentPatch, EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match &mut selection.mode {
            Mode::Viewing => Err(EditorError::NotEditing),
            Mode::Editing { save_in_flight } => {
                if *save_in_flight {
                    return Err(EditorError::SaveInFlight);
                }
                *save_in_flight = true;
                Ok(FragmentPatch::full(&selection.draft))
            }
        }
    }

    /// The collaborator accepted the save: adopt its version of the
    /// component and return to viewing.
    pub fn confirm_save(&mut self, updated: Component) -> Result<(), EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match selection.mode {
            Mode::Editing {
                save_in_flight: true,
            } => {
                selection.draft = updated.fragments.clone();
                selection.component = updated;
                selection.mode = Mode::Viewing;
            }
            _ => return Err(EditorError::NoSaveInFlight),
        }
        self.recompile();
        Ok(())
    }

    /// The collaborator rejected the save: stay in edit mode with the
    /// draft intact so the user can retry manually.
    pub fn reject_save(&mut self) -> Result<(), EditorError> {
        let selection = self.selection.as_mut().ok_or(EditorError::NothingSelected)?;
        match &mut selection.mode {
            Mode::Editing { save_in_flight } if *save_in_flight => {
                *save_in_flight = false;
                Ok(())
            }
            _ => Err(EditorError::NoSaveInFlight),
        }
    }

    /// Drive the full save handshake against a store in one call.
    pub fn save_with<S: FragmentStore>(&mut self, store: &mut S) -> Result<(), EditorError> {
        let patch = self.save()?;
        let id = self
            .selected()
            .map(|c| c.id)
            .ok_or(EditorError::NothingSelected)?;

        match store.update_fragments(id, &patch) {
            Ok(updated) => self.confirm_save(updated),
            Err(e) => {
                self.reject_save()?;
                Err(EditorError::Store(e))
            }
        }
    }

    /// Source text of the active tab: the draft while editing, the saved
    /// fragments otherwise.
    pub fn current_code(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| match s.mode {
            Mode::Editing { .. } => s.draft.get(self.active_tab),
            Mode::Viewing => s.component.fragments.get(self.active_tab),
        })
    }

    /// Decorated source of the active tab for read-only display. Always
    /// highlights from the original source, never a highlighted result.
    pub fn highlighted_code(&self) -> Option<String> {
        let language = match self.active_tab {
            FragmentKind::Markup => Language::Markup,
            FragmentKind::Style => Language::Style,
            FragmentKind::Script => Language::Script,
        };
        self.current_code().map(|code| highlight(code, language))
    }

    /// Recompute the preview from the fragments the current state points
    /// at. Called at the end of every transition and fragment edit.
    fn recompile(&mut self) {
        self.preview = self.selection.as_ref().map(|s| match s.mode {
            Mode::Editing { .. } => compile(&s.draft),
            Mode::Viewing => compile(&s.component.fragments),
        });
    }
}
