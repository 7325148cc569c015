//! Theme for Recipe Gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
