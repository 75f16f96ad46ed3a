//! Composite icon locators for the treestats icon service.
//!
//! An item icon is drawn from up to five layers: the base icon, two overlays,
//! an underlay and a category background. The service composes them
//! server-side; this module only builds the URL that asks for it.

use crate::item_type::category_of;

/// Icon endpoint. The base icon id is appended as a path segment.
pub const ICON_BASE_URL: &str = "https://dats.treestats.net/icons";

/// Icon layers for a single item.
///
/// Optional ids are included only when present and non-zero. The background
/// is the category name of `item_type`, and is left out when the item type
/// does not map to a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconLayers {
    pub icon_id: u32,
    pub overlay: Option<u32>,
    pub overlay2: Option<u32>,
    pub underlay: Option<u32>,
    pub item_type: Option<u32>,
}

impl IconLayers {
    pub fn new(icon_id: u32) -> Self {
        Self {
            icon_id,
            ..Default::default()
        }
    }

    pub fn overlay(mut self, overlay: Option<u32>) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn overlay2(mut self, overlay2: Option<u32>) -> Self {
        self.overlay2 = overlay2;
        self
    }

    pub fn underlay(mut self, underlay: Option<u32>) -> Self {
        self.underlay = underlay;
        self
    }

    pub fn item_type(mut self, item_type: Option<u32>) -> Self {
        self.item_type = item_type;
        self
    }

    /// Build the locator. Parameter order is fixed:
    /// `scale`, `overlay`, `overlay2`, `underlay`, `background`.
    pub fn to_url(&self) -> String {
        let mut url = format!("{}/{}?scale=2", ICON_BASE_URL, self.icon_id);

        let layers = [
            ("overlay", self.overlay),
            ("overlay2", self.overlay2),
            ("underlay", self.underlay),
        ];
        for (key, value) in layers {
            if let Some(id) = non_zero(value) {
                url.push_str(&format!("&{key}={id}"));
            }
        }

        if let Some(category) = category_of(self.item_type) {
            url.push_str(&format!("&background={category}"));
        }

        url
    }
}

impl std::fmt::Display for IconLayers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Positional form of [`IconLayers::to_url`].
pub fn build_icon_url(
    icon_id: u32,
    overlay: Option<u32>,
    overlay2: Option<u32>,
    underlay: Option<u32>,
    item_type: Option<u32>,
) -> String {
    IconLayers::new(icon_id)
        .overlay(overlay)
        .overlay2(overlay2)
        .underlay(underlay)
        .item_type(item_type)
        .to_url()
}

/// Zero is the dat files' "no asset" id.
fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|&v| v != 0)
}

#[cfg(test)]
#[path = "tests/icon_tests.rs"]
mod tests;
