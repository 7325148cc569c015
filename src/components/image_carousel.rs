//! Image Carousel
//!
//! Modal image with left/right arrows when the recipe has several images.

use dioxus::prelude::*;
use recipe_gallery_core::FocusSlot;

use crate::context::use_gallery;

#[component]
pub fn ImageCarousel(
    /// Alt text for every image of the recipe
    alt: String,
) -> Element {
    let ctx = use_gallery();
    let mut modal = ctx.modal;

    let (src, has_arrows) = {
        let modal = modal.read();
        let src = modal.current_image().unwrap_or_default().to_string();
        let has_arrows = modal
            .session()
            .is_some_and(|s| s.carousel().has_arrows());
        (src, has_arrows)
    };

    rsx! {
        div { id: "modalImageWrap", class: "modal-image-wrap",
            img { id: "modalImage", class: "modal-image", src: "{src}", alt: "{alt}" }

            if has_arrows {
                button {
                    class: "modal-arrow left",
                    r#type: "button",
                    "aria-label": "Previous image",
                    onmounted: move |evt| ctx.register_slot(FocusSlot::PrevImage, evt.data()),
                    onfocus: move |_| ctx.mark_focused(FocusSlot::PrevImage),
                    onblur: move |_| ctx.clear_focused(FocusSlot::PrevImage),
                    onclick: move |e| {
                        e.stop_propagation();
                        modal.write().prev_image();
                    },
                    "‹"
                }
                button {
                    class: "modal-arrow right",
                    r#type: "button",
                    "aria-label": "Next image",
                    onmounted: move |evt| ctx.register_slot(FocusSlot::NextImage, evt.data()),
                    onfocus: move |_| ctx.mark_focused(FocusSlot::NextImage),
                    onblur: move |_| ctx.clear_focused(FocusSlot::NextImage),
                    onclick: move |e| {
                        e.stop_propagation();
                        modal.write().next_image();
                    },
                    "›"
                }
            }
        }
    }
}
