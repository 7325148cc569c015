//! Embedded recipe video.

use dioxus::prelude::*;
use recipe_gallery_core::FocusSlot;

use super::UiLabel;
use crate::context::use_gallery;

const PLAYER_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Video section; renders nothing without an embeddable URL.
#[component]
pub fn VideoSection(embed_url: Option<String>) -> Element {
    let ctx = use_gallery();
    let Some(url) = embed_url else {
        return VNode::empty();
    };

    rsx! {
        div { id: "videoContainer", class: "video-container",
            h3 { UiLabel { path: "modal.watchVideo" } }
            div { id: "videoFrameWrap", class: "video-frame-wrap",
                iframe {
                    src: "{url}",
                    width: "100%",
                    height: "315",
                    frameborder: "0",
                    allow: PLAYER_ALLOW,
                    allowfullscreen: true,
                    onmounted: move |evt| ctx.register_slot(FocusSlot::Video, evt.data()),
                    onfocus: move |_| ctx.mark_focused(FocusSlot::Video),
                    onblur: move |_| ctx.clear_focused(FocusSlot::Video),
                }
            }
        }
    }
}
