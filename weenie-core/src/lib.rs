pub mod icon;
pub mod item_type;
pub mod weenie;

pub use icon::{ICON_BASE_URL, IconLayers, build_icon_url};
pub use item_type::{
    DEFAULT_BACKGROUND_ID, ItemCategory, ItemCategoryParseError, background_of, category_of,
};
pub use weenie::{ItemPresentation, WeenieDetail, WeenieSummary};
