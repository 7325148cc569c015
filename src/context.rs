//! Gallery session context for Recipe Gallery.
//!
//! One [`GalleryContext`] is created by the root component and lives for the
//! whole page session. It owns the active language and theme, the loaded
//! recipes, the modal controller, and the element handles needed to move
//! keyboard focus.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let ctx = use_gallery();
//! ctx.open_recipe("ramen");
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use recipe_gallery_core::{
    CardRegistry, FocusOrigin, FocusSlot, FocusTrap, GalleryConfig, KeyAction, KeyPress,
    Language, Lookup, ModalController, OpenOutcome, PreferenceStore, RecipeDetail, RecipeStore,
    Theme,
};

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the gallery configuration set from command line args.
pub fn get_gallery_config() -> GalleryConfig {
    crate::get_gallery_config()
}

/// Progress of the one-shot recipe load.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(RecipeStore),
    Failed(String),
}

/// Session state shared by all gallery components.
///
/// Every field is a signal, so the context is `Copy` and handlers can
/// capture it by value.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    pub language: Signal<Language>,
    pub theme: Signal<Theme>,
    pub recipes: Signal<LoadState>,
    pub modal: Signal<ModalController>,
    /// Focus slot inside the modal that currently has keyboard focus
    pub active_slot: Signal<Option<FocusSlot>>,
    slot_handles: Signal<HashMap<FocusSlot, Rc<MountedData>>>,
    cards: Signal<CardRegistry<Rc<MountedData>>>,
    preferences: Signal<Option<PreferenceStore>>,
}

impl GalleryContext {
    pub fn new(
        language: Signal<Language>,
        theme: Signal<Theme>,
        preferences: Signal<Option<PreferenceStore>>,
    ) -> Self {
        Self {
            language,
            theme,
            recipes: Signal::new(LoadState::Loading),
            modal: Signal::new(ModalController::new()),
            active_slot: Signal::new(None),
            slot_handles: Signal::new(HashMap::new()),
            cards: Signal::new(CardRegistry::new()),
            preferences,
        }
    }

    /// Switch the UI language and persist it.
    pub fn set_language(mut self, language: Language) {
        self.language.set(language);
        if let Some(prefs) = self.preferences.read().as_ref() {
            if let Err(e) = prefs.save_language(language) {
                tracing::warn!("Failed to save language preference: {}", e);
            }
        }
        tracing::debug!("Language changed to: {}", language);
    }

    /// Flip between light and dark, persisting the new theme.
    pub fn toggle_theme(mut self) {
        let theme = self.theme.read().toggled();
        self.theme.set(theme);
        if let Some(prefs) = self.preferences.read().as_ref() {
            if let Err(e) = prefs.save_theme(theme) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
        }
    }

    /// Remember a card's element so focus can return to it after close.
    pub fn register_card(mut self, id: String, handle: Rc<MountedData>) {
        self.cards.write().register(id, handle);
    }

    /// Forget a card that left the grid.
    pub fn unregister_card(mut self, id: &str) {
        self.cards.write().unregister(id);
    }

    /// Remember a focusable control inside the open modal.
    pub fn register_slot(mut self, slot: FocusSlot, handle: Rc<MountedData>) {
        self.slot_handles.write().insert(slot, handle);
    }

    /// Record which modal control currently has keyboard focus.
    pub fn mark_focused(mut self, slot: FocusSlot) {
        self.active_slot.set(Some(slot));
    }

    /// Focus left `slot`; keep a newer focus record if one already landed.
    pub fn clear_focused(mut self, slot: FocusSlot) {
        if *self.active_slot.peek() == Some(slot) {
            self.active_slot.set(None);
        }
    }

    /// Open the modal for `id`, opened from that recipe's card.
    pub fn open_recipe(mut self, id: &str) {
        let outcome = match &*self.recipes.read() {
            LoadState::Ready(store) => {
                self.modal
                    .write()
                    .open(store, id, Some(FocusOrigin(id.to_string())))
            }
            _ => OpenOutcome::NotFound,
        };

        match outcome {
            OpenOutcome::Opened => {
                self.slot_handles.write().clear();
                self.active_slot.set(None);
                set_body_modal_marker(true);
                tracing::debug!("Opened recipe {}", id);
            }
            OpenOutcome::NotFound => {
                tracing::warn!("No recipe with id '{}'", id);
            }
        }
    }

    /// Close the modal and return focus to the card that opened it.
    pub fn close_modal(mut self) {
        if !self.modal.read().is_open() {
            return;
        }
        let origin = self.modal.write().close();
        self.slot_handles.write().clear();
        self.active_slot.set(None);
        set_body_modal_marker(false);

        let Some(origin) = origin else {
            return;
        };
        let Some(handle) = self.cards.read().target(&origin).cloned() else {
            tracing::debug!("Card {} is gone, focus not restored", origin.0);
            return;
        };
        spawn(async move {
            if let Err(e) = handle.set_focus(true).await {
                tracing::debug!("Focus not restored to card {}: {:?}", origin.0, e);
            }
        });
    }

    /// Run a key press through the modal's focus trap.
    ///
    /// `active` is the focused modal control, `None` when focus sits
    /// outside the modal. Returns true when the browser's default action
    /// must be suppressed.
    pub fn handle_key(self, press: KeyPress, active: Option<FocusSlot>) -> bool {
        let open = self.modal.read().is_open();
        match self.focus_trap().on_key(open, press, active) {
            KeyAction::Ignore => false,
            KeyAction::Close => {
                self.close_modal();
                false
            }
            KeyAction::Focus(slot) => {
                self.focus_slot(slot);
                true
            }
        }
    }

    /// Move keyboard focus to a control inside the modal.
    pub fn focus_slot(self, slot: FocusSlot) {
        let handle = self.slot_handles.read().get(&slot).cloned();
        if let Some(handle) = handle {
            spawn(async move {
                if let Err(e) = handle.set_focus(true).await {
                    tracing::debug!("Could not focus {:?}: {:?}", slot, e);
                }
            });
        }
    }

    /// Detail view of the open recipe in the active language.
    pub fn current_detail(&self) -> Option<RecipeDetail> {
        let modal = self.modal.read();
        let session = modal.session()?;
        let recipes = self.recipes.read();
        let LoadState::Ready(store) = &*recipes else {
            return None;
        };
        match store.find(session.recipe_id()) {
            Lookup::Found(recipe) => Some(RecipeDetail::project(recipe, *self.language.read())),
            Lookup::NotFound => None,
        }
    }

    /// Focus trap over the controls the open modal renders.
    pub fn focus_trap(&self) -> FocusTrap<FocusSlot> {
        match self.current_detail() {
            Some(detail) => self.modal.read().focus_trap(&detail),
            None => FocusTrap::new(Vec::new()),
        }
    }
}

/// Hook to access the gallery session from context.
pub fn use_gallery() -> GalleryContext {
    use_context::<GalleryContext>()
}

/// Run a fire-and-forget DOM script, logging a failure.
fn run_script(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::debug!("DOM script failed: {:?}", e);
        }
    });
}

/// Toggle the `modal-open` class on the document body.
fn set_body_modal_marker(open: bool) {
    run_script(format!(
        "document.body.classList.toggle('modal-open', {open}); return true;"
    ));
}

/// Set the document root `data-theme` attribute.
pub fn apply_theme_attribute(theme: Theme) {
    run_script(format!(
        "document.documentElement.setAttribute('data-theme', '{}'); return true;",
        theme.code()
    ));
}
