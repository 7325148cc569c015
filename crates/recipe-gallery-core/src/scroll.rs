//! Scroll fade signals for the recipe detail panel.

/// Raw scroll geometry of the panel, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

/// Which edges of the panel the reader is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFade {
    pub at_top: bool,
    pub at_bottom: bool,
}

impl Default for ScrollFade {
    fn default() -> Self {
        Self {
            at_top: true,
            at_bottom: true,
        }
    }
}

impl ScrollFade {
    pub fn from_metrics(m: ScrollMetrics) -> Self {
        Self {
            at_top: m.scroll_top <= 0.0,
            at_bottom: (m.scroll_top + m.client_height).ceil() >= m.scroll_height,
        }
    }

    /// Opacity of the top fade overlay: hidden at the top edge.
    pub fn top_opacity(&self) -> u8 {
        if self.at_top {
            0
        } else {
            1
        }
    }

    /// Opacity of the bottom fade overlay: hidden at the bottom edge.
    pub fn bottom_opacity(&self) -> u8 {
        if self.at_bottom {
            0
        } else {
            1
        }
    }
}
