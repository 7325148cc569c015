//! Locations list: where to try the dish.

use dioxus::prelude::*;
use recipe_gallery_core::{FocusSlot, LinkView, LocationsView};

use crate::context::use_gallery;

#[component]
pub fn LocationsList(locations: LocationsView) -> Element {
    let rows = match locations {
        LocationsView::Placeholder(text) => {
            return rsx! {
                ul { id: "modalLocationsList", class: "locations-list",
                    li { "{text}" }
                }
            };
        }
        LocationsView::Rows(rows) => rows,
    };

    rsx! {
        ul { id: "modalLocationsList", class: "locations-list",
            for (i, place) in rows.into_iter().enumerate() {
                li { key: "{i}",
                    strong { "{place.name}" }
                    br {}
                    span { "{place.address}" }
                    br {}
                    if let Some(link) = place.website.clone() {
                        LocationLink { link: link, slot: FocusSlot::Website(i), class: "location-link website-link" }
                        br {}
                    }
                    if let Some(link) = place.map.clone() {
                        LocationLink { link: link, slot: FocusSlot::Map(i), class: "location-link map-link" }
                    }
                }
            }
        }
    }
}

#[component]
fn LocationLink(link: LinkView, slot: FocusSlot, class: &'static str) -> Element {
    let ctx = use_gallery();

    rsx! {
        a {
            class: "{class}",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener",
            onmounted: move |evt| ctx.register_slot(slot, evt.data()),
            onfocus: move |_| ctx.mark_focused(slot),
            onblur: move |_| ctx.clear_focused(slot),
            "{link.label}"
        }
    }
}
