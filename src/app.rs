use dioxus::prelude::*;
use recipe_gallery_core::{KeyPress, Language, PreferenceStore, Preferences, RecipeStore, TrapKey};
use serde::Deserialize;

use crate::components::{CardGrid, GalleryHeader, InlineError, RecipeModal};
use crate::context::{
    apply_theme_attribute, get_data_dir, get_gallery_config, GalleryContext, LoadState,
};
use crate::theme::GLOBAL_STYLES;

/// Open the preference store and read the saved language and theme.
///
/// A store that cannot be opened is logged and the defaults are used; the
/// gallery still works, it just forgets changes on exit.
fn load_preferences() -> (Option<PreferenceStore>, Preferences) {
    let path = get_data_dir().join("preferences.redb");
    match PreferenceStore::new(&path) {
        Ok(store) => {
            let prefs = store.load_preferences().unwrap_or_else(|e| {
                tracing::warn!("Failed to read preferences: {}", e);
                Preferences::default()
            });
            (Some(store), prefs)
        }
        Err(e) => {
            tracing::warn!("Preference store unavailable at {:?}: {}", path, e);
            (None, Preferences::default())
        }
    }
}

/// Document listener for keys pressed while focus is outside the app shell,
/// typically on the body after a click on plain modal text. Tab is
/// suppressed here because the trap always moves focus in that case.
const DOCUMENT_KEY_BRIDGE: &str = r#"
    document.addEventListener('keydown', (e) => {
        if (e.key !== 'Tab' && e.key !== 'Escape') return;
        if (e.target instanceof Element && e.target.closest('.app-shell')) return;
        const overlay = document.getElementById('modalOverlay');
        if (!overlay || !overlay.classList.contains('open')) return;
        if (e.key === 'Tab') e.preventDefault();
        dioxus.send({ key: e.key, shift: e.shiftKey });
    });
    await new Promise(() => {});
"#;

/// Key press forwarded by [`DOCUMENT_KEY_BRIDGE`].
#[derive(Debug, Deserialize)]
struct DocumentKey {
    key: String,
    shift: bool,
}

/// Root application component.
///
/// Provides global styles and the gallery session, loads the recipes once,
/// and owns the document-level keyboard handler for the modal.
#[component]
pub fn App() -> Element {
    let (store, prefs) = use_hook(load_preferences);
    let language = use_signal(|| prefs.language);
    let theme = use_signal(|| prefs.theme);
    let preferences = use_signal(|| store.clone());

    let ctx = use_context_provider(|| GalleryContext::new(language, theme, preferences));
    let mut recipes = ctx.recipes;

    // Theme attribute follows the signal, including the initial value
    use_effect(move || apply_theme_attribute(theme()));

    // Load recipes on mount
    use_effect(move || {
        spawn(async move {
            let config = get_gallery_config();
            match RecipeStore::load(&config.data_source).await {
                Ok(store) => {
                    tracing::info!("Loaded {} recipes", store.len());
                    recipes.set(LoadState::Ready(store));
                }
                Err(e) => {
                    tracing::error!("Error loading recipes: {}", e);
                    recipes.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    // Keys whose target is outside the shell never reach `on_keydown`
    use_future(move || async move {
        let mut bridge = document::eval(DOCUMENT_KEY_BRIDGE);
        loop {
            match bridge.recv::<DocumentKey>().await {
                Ok(key) => {
                    let press = KeyPress::new(TrapKey::from_key_name(&key.key), key.shift);
                    ctx.handle_key(press, None);
                }
                Err(e) => {
                    tracing::debug!("Document key bridge stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    let on_keydown = move |evt: KeyboardEvent| {
        if !ctx.modal.read().is_open() {
            return;
        }
        let key = match evt.key() {
            Key::Tab => TrapKey::Tab,
            Key::Escape => TrapKey::Escape,
            _ => TrapKey::Other,
        };
        let press = KeyPress::new(key, evt.modifiers().contains(Modifiers::SHIFT));
        let active = *ctx.active_slot.read();

        if ctx.handle_key(press, active) {
            evt.prevent_default();
        }
    };

    let lang: Language = language();
    let inline_errors = get_gallery_config().inline_errors;

    let gallery = match &*recipes.read() {
        LoadState::Ready(store) => rsx! {
            CardGrid { recipes: store.recipes().to_vec(), language: lang }
        },
        LoadState::Failed(_) if inline_errors => rsx! {
            InlineError {}
        },
        LoadState::Loading | LoadState::Failed(_) => rsx! {},
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell", onkeydown: on_keydown,
            GalleryHeader {}
            main { class: "grid", {gallery} }
            RecipeModal {}
        }
    }
}
