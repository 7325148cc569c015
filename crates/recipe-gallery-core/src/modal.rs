//! Modal controller: the recipe detail session.
//!
//! ```text
//! Closed --open(id)--> Open { recipe, image index 0 } --close()--> Closed
//! ```
//!
//! The controller owns the only mutable session state. Views are projected
//! from it on every render through [`RecipeDetail::project`].

use std::collections::HashMap;

use crate::carousel::Carousel;
use crate::focus::{is_focusable, ElementKind, FocusSlot, FocusTrap};
use crate::i18n::{Language, UiText};
use crate::recipe::{Location, Recipe};
use crate::store::{Lookup, RecipeStore};
use crate::video::to_embed_url;

/// The card that opened the modal, identified by its recipe id.
///
/// Handed back on close so the view can return keyboard focus to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusOrigin(pub String);

/// Live card handles, keyed by recipe id.
///
/// Cards register when mounted and unregister when dropped, so a handle
/// for a card that left the grid is never handed out.
#[derive(Debug, Clone)]
pub struct CardRegistry<H> {
    cards: HashMap<String, H>,
}

impl<H> Default for CardRegistry<H> {
    fn default() -> Self {
        Self {
            cards: HashMap::new(),
        }
    }
}

impl<H> CardRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, handle: H) {
        self.cards.insert(id.into(), handle);
    }

    pub fn unregister(&mut self, id: &str) -> Option<H> {
        self.cards.remove(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Handle to restore focus to, if the origin card is still attached.
    pub fn target(&self, origin: &FocusOrigin) -> Option<&H> {
        self.cards.get(&origin.0)
    }
}

/// State of one open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSession {
    recipe_id: String,
    carousel: Carousel,
    origin: Option<FocusOrigin>,
}

impl ModalSession {
    pub fn recipe_id(&self) -> &str {
        &self.recipe_id
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalSession),
}

/// Result of [`ModalController::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// No recipe has that id; the modal state is unchanged
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn session(&self) -> Option<&ModalSession> {
        match &self.state {
            ModalState::Open(session) => Some(session),
            ModalState::Closed => None,
        }
    }

    /// Open the recipe `id`, starting a fresh session at image 0.
    ///
    /// Opening while another session is open replaces it; at most one
    /// session exists at a time.
    pub fn open(
        &mut self,
        store: &RecipeStore,
        id: &str,
        origin: Option<FocusOrigin>,
    ) -> OpenOutcome {
        let Lookup::Found(recipe) = store.find(id) else {
            return OpenOutcome::NotFound;
        };
        self.state = ModalState::Open(ModalSession {
            recipe_id: recipe.id.clone(),
            carousel: Carousel::new(recipe.gallery_images()),
            origin,
        });
        OpenOutcome::Opened
    }

    /// Close the modal and hand back the element focus should return to.
    pub fn close(&mut self) -> Option<FocusOrigin> {
        match std::mem::take(&mut self.state) {
            ModalState::Open(session) => session.origin,
            ModalState::Closed => None,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.session().and_then(|s| s.carousel.current())
    }

    pub fn image_index(&self) -> usize {
        self.session().map_or(0, |s| s.carousel.index())
    }

    pub fn next_image(&mut self) -> Option<&str> {
        match &mut self.state {
            ModalState::Open(session) => session.carousel.next(),
            ModalState::Closed => None,
        }
    }

    pub fn prev_image(&mut self) -> Option<&str> {
        match &mut self.state {
            ModalState::Open(session) => session.carousel.prev(),
            ModalState::Closed => None,
        }
    }

    /// Focus trap for the current session's rendered controls.
    pub fn focus_trap(&self, detail: &RecipeDetail) -> FocusTrap<FocusSlot> {
        let has_arrows = self.session().is_some_and(|s| s.carousel.has_arrows());
        detail.focus_trap(has_arrows)
    }
}

/// A labeled link in a location row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: &'static str,
}

/// One rendered location row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub name: String,
    pub address: String,
    pub website: Option<LinkView>,
    pub map: Option<LinkView>,
}

impl LocationView {
    fn project(place: &Location, lang: Language) -> Self {
        let link = |href: &Option<String>, key: UiText| {
            href.as_ref()
                .filter(|h| !h.is_empty())
                .map(|h| LinkView {
                    href: h.clone(),
                    label: key.text(lang),
                })
        };
        Self {
            name: place.name.clone(),
            address: place
                .address
                .clone()
                .unwrap_or_else(|| UiText::AddressUnavailable.text(lang).to_string()),
            website: link(&place.website, UiText::VisitWebsite),
            map: link(&place.link, UiText::ViewOnMap),
        }
    }
}

/// Locations pane content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationsView {
    /// Single localized placeholder row
    Placeholder(&'static str),
    Rows(Vec<LocationView>),
}

/// Everything the modal's detail pane shows, in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub title: String,
    pub description: String,
    pub alt: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Embeddable player URL; `None` hides the video section
    pub embed_url: Option<String>,
    pub locations: LocationsView,
}

impl RecipeDetail {
    pub fn project(recipe: &Recipe, lang: Language) -> Self {
        let locations = if recipe.locations.is_empty() {
            LocationsView::Placeholder(UiText::NoRestaurantData.text(lang))
        } else {
            LocationsView::Rows(
                recipe
                    .locations
                    .iter()
                    .map(|place| LocationView::project(place, lang))
                    .collect(),
            )
        };
        Self {
            title: recipe.title(lang).to_string(),
            description: recipe.description(lang).to_string(),
            alt: recipe.alt(lang).to_string(),
            ingredients: recipe.ingredients(lang).to_vec(),
            steps: recipe.steps(lang).to_vec(),
            embed_url: recipe.video.as_deref().and_then(to_embed_url),
            locations,
        }
    }

    /// Focusable controls in document order: close button, carousel
    /// arrows, video player, then each location's links.
    pub fn focus_trap(&self, has_arrows: bool) -> FocusTrap<FocusSlot> {
        let mut candidates = vec![(FocusSlot::Close, ElementKind::Button)];
        if has_arrows {
            candidates.push((FocusSlot::PrevImage, ElementKind::Button));
            candidates.push((FocusSlot::NextImage, ElementKind::Button));
        }
        if self.embed_url.is_some() {
            candidates.push((FocusSlot::Video, ElementKind::Iframe));
        }
        if let LocationsView::Rows(rows) = &self.locations {
            for (i, row) in rows.iter().enumerate() {
                if row.website.is_some() {
                    candidates.push((FocusSlot::Website(i), ElementKind::Link { has_href: true }));
                }
                if row.map.is_some() {
                    candidates.push((FocusSlot::Map(i), ElementKind::Link { has_href: true }));
                }
            }
        }
        FocusTrap::new(
            candidates
                .into_iter()
                .filter(|(_, kind)| is_focusable(*kind))
                .map(|(slot, _)| slot)
                .collect(),
        )
    }
}
