//! Scenario and boundary tests for the gallery state
//!
//! These tests drive the core the way the desktop view does: project cards,
//! open and close the modal, and feed key presses through the focus trap.

use recipe_gallery_core::{
    render_cards, CardRegistry, FocusOrigin, FocusSlot, KeyAction, KeyPress, Language,
    LoadError, LocationsView, Lookup, ModalController, OpenOutcome, RecipeDetail, RecipeStore,
    TrapKey, UiText,
};

fn store() -> RecipeStore {
    RecipeStore::parse(include_bytes!("../../../data/recipes.json")).expect("sample data parses")
}

fn detail(store: &RecipeStore, id: &str, lang: Language) -> RecipeDetail {
    match store.find(id) {
        Lookup::Found(recipe) => RecipeDetail::project(recipe, lang),
        Lookup::NotFound => panic!("{id} missing from sample data"),
    }
}

// ============================================================================
// Modal Scenarios
// ============================================================================

/// Legacy single image: shown, no arrows
#[test]
fn test_legacy_image_without_arrows() {
    let store = RecipeStore::parse(br#"[{ "id": "x", "images": [], "image": "a.jpg" }]"#).unwrap();
    let mut modal = ModalController::new();

    assert_eq!(modal.open(&store, "x", None), OpenOutcome::Opened);
    assert_eq!(modal.current_image(), Some("a.jpg"));
    assert!(!modal.session().unwrap().carousel().has_arrows());

    let trap = modal.focus_trap(&detail(&store, "x", Language::En));
    assert!(!trap.order().contains(&FocusSlot::PrevImage));
    assert!(!trap.order().contains(&FocusSlot::NextImage));
}

/// Empty locations: exactly one localized placeholder
#[test]
fn test_empty_locations_placeholder() {
    let store = RecipeStore::parse(br#"[{ "id": "y", "locations": [] }]"#).unwrap();
    for lang in Language::ALL {
        assert_eq!(
            detail(&store, "y", lang).locations,
            LocationsView::Placeholder(UiText::NoRestaurantData.text(lang))
        );
    }
}

/// Unknown or missing video hides the section
#[test]
fn test_video_section_hidden_without_embed() {
    let store = RecipeStore::parse(
        br#"[
            { "id": "none" },
            { "id": "vimeo", "video": "https://vimeo.com/123" },
            { "id": "yt", "video": "https://www.youtube.com/watch?v=abc" }
        ]"#,
    )
    .unwrap();
    assert_eq!(detail(&store, "none", Language::En).embed_url, None);
    assert_eq!(detail(&store, "vimeo", Language::En).embed_url, None);
    assert_eq!(
        detail(&store, "yt", Language::En).embed_url.as_deref(),
        Some("https://www.youtube.com/embed/abc")
    );
}

/// Opening an unknown id is reported and leaves an open session untouched
#[test]
fn test_unknown_id_keeps_current_session() {
    let store = store();
    let first = store.recipes()[0].id.clone();
    let mut modal = ModalController::new();
    modal.open(&store, &first, Some(FocusOrigin(first.clone())));

    assert_eq!(modal.open(&store, "does-not-exist", None), OpenOutcome::NotFound);
    assert_eq!(modal.session().map(|s| s.recipe_id()), Some(first.as_str()));
}

/// Reopening starts at image 0 even after wrapping backwards
#[test]
fn test_reopen_resets_after_wrap() {
    let store = store();
    let id = store
        .recipes()
        .iter()
        .find(|r| r.gallery_images().len() > 1)
        .map(|r| r.id.clone())
        .expect("sample data has a multi-image recipe");

    let mut modal = ModalController::new();
    modal.open(&store, &id, None);
    modal.prev_image();
    assert!(modal.image_index() > 0);
    modal.close();
    modal.open(&store, &id, None);
    assert_eq!(modal.image_index(), 0);
}

/// Closing after the origin card left the grid restores focus nowhere
#[test]
fn test_close_with_detached_origin_is_noop() {
    let store = store();
    let mut cards = CardRegistry::new();
    for recipe in store.recipes() {
        cards.register(recipe.id.clone(), recipe.id.len());
    }

    let mut modal = ModalController::new();
    modal.open(&store, "sushi", Some(FocusOrigin("sushi".into())));
    cards.unregister("sushi");

    let origin = modal.close().expect("open session carries its origin");
    assert_eq!(origin, FocusOrigin("sushi".into()));
    assert_eq!(cards.target(&origin), None);
    assert!(!modal.is_open());
    assert_eq!(cards.len(), store.len() - 1);
}

// ============================================================================
// Malformed Optional Fields
// ============================================================================

/// A null optional field falls back on its own without failing the load
#[test]
fn test_null_fields_fall_back_per_field() {
    let store = RecipeStore::parse(
        br#"[
            { "id": "a", "locations": null, "images": null, "image": "a.jpg" },
            { "id": "b", "title": { "en": "Udon", "ro": null }, "alt": null, "steps": null }
        ]"#,
    )
    .expect("null optional fields still load");
    assert_eq!(store.len(), 2);

    let a = detail(&store, "a", Language::Ro);
    assert_eq!(
        a.locations,
        LocationsView::Placeholder(UiText::NoRestaurantData.text(Language::Ro))
    );
    let mut modal = ModalController::new();
    modal.open(&store, "a", None);
    assert_eq!(modal.current_image(), Some("a.jpg"));

    let b = detail(&store, "b", Language::Ro);
    assert_eq!(b.title, "Udon");
    assert_eq!(b.alt, "Udon");
    assert!(b.steps.is_empty());
}

// ============================================================================
// Focus Trap
// ============================================================================

/// Tab on the last focusable wraps to the first and suppresses the default
#[test]
fn test_tab_wraps_inside_open_modal() {
    let store = store();
    let id = store.recipes()[0].id.clone();
    let mut modal = ModalController::new();
    modal.open(&store, &id, None);

    let trap = modal.focus_trap(&detail(&store, &id, Language::En));
    let last = trap.last().unwrap();
    assert_eq!(
        trap.on_key(modal.is_open(), KeyPress::new(TrapKey::Tab, false), Some(last)),
        KeyAction::Focus(FocusSlot::Close)
    );
}

/// Tab from outside the modal (focus on the page body) lands inside it
#[test]
fn test_tab_from_body_enters_modal() {
    let store = store();
    let mut modal = ModalController::new();
    modal.open(&store, "mochi", None);

    let trap = modal.focus_trap(&detail(&store, "mochi", Language::En));
    assert_eq!(trap.order(), [FocusSlot::Close, FocusSlot::Video]);
    assert_eq!(
        trap.on_key(true, KeyPress::new(TrapKey::Tab, false), None),
        KeyAction::Focus(FocusSlot::Close)
    );
    assert_eq!(
        trap.on_key(true, KeyPress::new(TrapKey::Tab, true), None),
        KeyAction::Focus(FocusSlot::Video)
    );
    assert_eq!(
        trap.on_key(true, KeyPress::new(TrapKey::Escape, false), None),
        KeyAction::Close
    );
}

/// Handlers are inert once the modal is closed
#[test]
fn test_keys_inert_after_close() {
    let store = store();
    let id = store.recipes()[0].id.clone();
    let mut modal = ModalController::new();
    modal.open(&store, &id, None);
    let trap = modal.focus_trap(&detail(&store, &id, Language::En));
    modal.close();

    let esc = KeyPress::new(TrapKey::Escape, false);
    assert_eq!(trap.on_key(modal.is_open(), esc, None), KeyAction::Ignore);
}

// ============================================================================
// Language Switching
// ============================================================================

/// Switching language redraws every card, falling back per field
#[test]
fn test_language_switch_redraws_cards() {
    let store = store();
    let en = render_cards(store.recipes(), Language::En);
    let ru = render_cards(store.recipes(), Language::Ru);

    assert_eq!(en.len(), ru.len());
    let titles: Vec<_> = ru.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, ["Рамен Тонкоцу", "Нигири суши", "Дайфуку моти"]);
    assert!(ru.iter().all(|card| card.cta == "Нажмите для просмотра"));
    // sushi has no Russian description; the English one stands in
    assert_eq!(ru[1].description, en[1].description);
    assert_eq!(ru[1].description, "Hand-pressed rice topped with fresh fish.");
}

// ============================================================================
// Load Failures
// ============================================================================

/// The inline error for a failed load uses the active language
#[test]
fn test_inline_error_text() {
    let err = LoadError::Status(404);
    assert_eq!(err.to_string(), "HTTP 404");
    assert_eq!(UiText::LoadFailedTitle.text(Language::En), "Couldn't load recipes.");
    assert_eq!(
        UiText::LoadFailedTitle.text(Language::Ro),
        "Nu am putut încărca rețetele."
    );
}
