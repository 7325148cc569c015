//! UI Components for Recipe Gallery.

mod card_grid;
mod gallery_header;
mod image_carousel;
mod inline_error;
mod locations_list;
mod recipe_modal;
mod ui_label;
mod video_section;

pub use card_grid::CardGrid;
pub use gallery_header::GalleryHeader;
pub use image_carousel::ImageCarousel;
pub use inline_error::InlineError;
pub use locations_list::LocationsList;
pub use recipe_modal::RecipeModal;
pub use ui_label::UiLabel;
pub use video_section::VideoSection;
