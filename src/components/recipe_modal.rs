//! Recipe Modal Component
//!
//! Detail overlay for the open recipe: image carousel, ingredients, steps,
//! embedded video and locations, with scroll fades on the detail panel.

use std::rc::Rc;

use dioxus::prelude::*;
use recipe_gallery_core::{FocusSlot, ScrollFade, ScrollMetrics, UiText};

use super::{ImageCarousel, LocationsList, UiLabel, VideoSection};
use crate::context::use_gallery;

/// Read the panel's scroll geometry.
async fn measure(el: Rc<MountedData>) -> Option<ScrollMetrics> {
    let offset = el.get_scroll_offset().await.ok()?;
    let size = el.get_scroll_size().await.ok()?;
    let rect = el.get_client_rect().await.ok()?;
    Some(ScrollMetrics {
        scroll_top: offset.y,
        client_height: rect.size.height,
        scroll_height: size.height,
    })
}

/// Recompute fade signals from the panel's current position.
fn refresh_fades(panel: Signal<Option<Rc<MountedData>>>, mut fade: Signal<ScrollFade>) {
    let Some(el) = panel() else {
        return;
    };
    spawn(async move {
        if let Some(metrics) = measure(el).await {
            fade.set(ScrollFade::from_metrics(metrics));
        }
    });
}

/// Recipe detail modal.
///
/// The overlay is always present so its open state can be styled and
/// announced; the content only exists while a session is open. Clicking
/// the backdrop closes the modal, clicks inside it do not.
#[component]
pub fn RecipeModal() -> Element {
    let ctx = use_gallery();
    let panel = use_signal(|| Option::<Rc<MountedData>>::None);
    let fade = use_signal(ScrollFade::default);

    let lang = (ctx.language)();
    let detail = ctx.current_detail();
    let is_open = detail.is_some();
    let overlay_class = if is_open { "modal-overlay open" } else { "modal-overlay" };
    let aria_hidden = if is_open { "false" } else { "true" };
    let fade_state = fade();
    let top_opacity = fade_state.top_opacity();
    let bottom_opacity = fade_state.bottom_opacity();

    let content = match detail {
        None => rsx! {},
        Some(detail) => {
            let close_label = UiText::ModalClose.text(lang);

            rsx! {
                div {
                    class: "modal",
                    role: "dialog",
                    "aria-modal": "true",
                    "aria-labelledby": "modalTitle",
                    onclick: move |e| e.stop_propagation(),

                    button {
                        id: "closeBtn",
                        class: "close-btn",
                        r#type: "button",
                        "aria-label": "Close",
                        onmounted: move |evt| {
                            let handle = evt.data();
                            ctx.register_slot(FocusSlot::Close, handle.clone());
                            spawn(async move {
                                if let Err(e) = handle.set_focus(true).await {
                                    tracing::debug!("Could not focus close button: {:?}", e);
                                }
                            });
                        },
                        onfocus: move |_| ctx.mark_focused(FocusSlot::Close),
                        onblur: move |_| ctx.clear_focused(FocusSlot::Close),
                        onclick: move |_| ctx.close_modal(),
                        "{close_label}"
                    }

                    ImageCarousel { alt: detail.alt.clone() }

                    div { class: "recipe-panel",
                        div { class: "fade-top", style: "opacity: {top_opacity}" }

                        div {
                            id: "recipeContent",
                            class: "recipe-content",
                            onmounted: move |evt| {
                                let mut panel = panel;
                                panel.set(Some(evt.data()));
                                refresh_fades(panel, fade);
                            },
                            onscroll: move |_| refresh_fades(panel, fade),
                            onresize: move |_| refresh_fades(panel, fade),

                            h2 { id: "modalTitle", "{detail.title}" }
                            p { id: "modalDesc", "{detail.description}" }

                            h3 { UiLabel { path: "modal.ingredients" } }
                            ul { id: "modalIngredients",
                                for (i, item) in detail.ingredients.iter().enumerate() {
                                    li { key: "{i}", "{item}" }
                                }
                            }

                            h3 { UiLabel { path: "modal.steps" } }
                            ol { id: "modalSteps",
                                for (i, step) in detail.steps.iter().enumerate() {
                                    li { key: "{i}", "{step}" }
                                }
                            }

                            VideoSection { embed_url: detail.embed_url.clone() }

                            h3 { UiLabel { path: "modal.locations" } }
                            LocationsList { locations: detail.locations.clone() }
                        }

                        div { class: "fade-bottom", style: "opacity: {bottom_opacity}" }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            id: "modalOverlay",
            class: "{overlay_class}",
            "aria-hidden": "{aria_hidden}",
            onclick: move |_| ctx.close_modal(),
            {content}
        }
    }
}
