//! Recipe Gallery Core Library
//!
//! Data and state for a localized recipe gallery: the recipe store, the
//! localization table, and the modal session with its image carousel and
//! keyboard focus trap.
//!
//! ## Overview
//!
//! The gallery loads a list of recipes once, draws a card per recipe in the
//! active language, and opens a detail modal when a card is clicked. This
//! crate holds everything that can be expressed without a view layer; the
//! desktop application renders the projections it returns.
//!
//! ## Quick Start
//!
//! ```ignore
//! use recipe_gallery_core::{render_cards, DataSource, Language, ModalController, RecipeStore};
//!
//! let store = RecipeStore::load(&DataSource::parse("data/recipes.json")).await?;
//! for card in render_cards(store.recipes(), Language::Ro) {
//!     println!("{}: {}", card.id, card.title);
//! }
//!
//! let mut modal = ModalController::new();
//! modal.open(&store, "ramen", None);
//! modal.next_image();
//! ```

pub mod carousel;
pub mod config;
pub mod error;
pub mod focus;
pub mod grid;
pub mod i18n;
pub mod modal;
pub mod preferences;
pub mod recipe;
pub mod scroll;
pub mod store;
pub mod video;

// Re-exports
pub use carousel::Carousel;
pub use config::{DataSource, GalleryConfig, DEFAULT_DATA_URL};
pub use error::{GalleryError, GalleryResult, LoadError};
pub use focus::{FocusSlot, FocusTrap, KeyAction, KeyPress, TrapKey};
pub use grid::{render_cards, CardView};
pub use i18n::{translate_path, Language, UiText};
pub use modal::{
    CardRegistry, FocusOrigin, LinkView, LocationView, LocationsView, ModalController,
    ModalSession, ModalState, OpenOutcome, RecipeDetail,
};
pub use preferences::{PreferenceStore, Preferences, Theme};
pub use recipe::{Localized, Location, Recipe};
pub use scroll::{ScrollFade, ScrollMetrics};
pub use store::{Lookup, RecipeStore};
pub use video::to_embed_url;
