use serde::{Deserialize, Deserializer, Serialize};

use crate::icon::IconLayers;
use crate::item_type::{ItemCategory, background_of, category_of};

/// A search hit: just enough to list a weenie and fetch its detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeenieSummary {
    #[serde(rename = "class_Id")]
    pub class_id: u32,
    #[serde(rename = "class_Name")]
    pub class_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl WeenieSummary {
    /// The in-game name, or the class name when the weenie has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.class_name)
    }
}

/// A weenie with the properties needed to render its icon.
///
/// Every optional field comes from a left join against a property table, so
/// any of them may be missing for a given weenie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeenieDetail {
    #[serde(rename = "class_Id")]
    pub class_id: u32,
    #[serde(rename = "class_Name")]
    pub class_name: String,
    /// ACE `WeenieType`.
    #[serde(rename = "type")]
    pub weenie_type: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub icon_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub icon_overlay: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub icon_overlay2: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub icon_underlay: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub item_type: Option<u32>,
}

impl WeenieDetail {
    /// The in-game name, or the class name when the weenie has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.class_name)
    }

    pub fn category(&self) -> Option<ItemCategory> {
        category_of(self.item_type)
    }

    pub fn background_id(&self) -> u32 {
        background_of(self.item_type)
    }

    /// Icon layers for this weenie, or `None` if it has no base icon.
    pub fn icon_layers(&self) -> Option<IconLayers> {
        let icon_id = self.icon_id.filter(|&id| id != 0)?;
        Some(
            IconLayers::new(icon_id)
                .overlay(self.icon_overlay)
                .overlay2(self.icon_overlay2)
                .underlay(self.icon_underlay)
                .item_type(self.item_type),
        )
    }

    pub fn icon_url(&self) -> Option<String> {
        self.icon_layers().map(|layers| layers.to_url())
    }

    /// Everything a renderer needs to draw this weenie.
    pub fn presentation(&self) -> ItemPresentation {
        ItemPresentation {
            category: self.category(),
            background_id: self.background_id(),
            icon_url: self.icon_url(),
        }
    }
}

/// Presentation attributes derived from a [`WeenieDetail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPresentation {
    pub category: Option<ItemCategory>,
    /// Background texture, defaulted when the item type has none.
    pub background_id: u32,
    /// Composite icon locator; `None` when the weenie has no icon.
    pub icon_url: Option<String>,
}

/// Property values are stored as signed integers; anything that doesn't fit
/// a `u32` is treated as missing rather than failing the whole record.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(|v| u32::try_from(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_json() -> &'static str {
        r#"{
            "class_Id": 273,
            "class_Name": "swordlong",
            "type": 6,
            "last_Modified": "2019-02-04 06:52:23",
            "name": "Long Sword",
            "icon_id": 100667446,
            "icon_overlay": null,
            "icon_overlay2": 0,
            "icon_underlay": 100667520,
            "item_type": 1
        }"#
    }

    #[test]
    fn decodes_detail_and_ignores_extra_columns() {
        let detail: WeenieDetail = serde_json::from_str(detail_json()).unwrap();
        assert_eq!(detail.class_id, 273);
        assert_eq!(detail.weenie_type, 6);
        assert_eq!(detail.display_name(), "Long Sword");
        assert_eq!(detail.icon_id, Some(100667446));
        assert_eq!(detail.icon_overlay, None);
        assert_eq!(detail.icon_overlay2, Some(0));
        assert_eq!(detail.item_type, Some(1));
    }

    #[test]
    fn missing_optional_columns_are_absent() {
        let detail: WeenieDetail =
            serde_json::from_str(r#"{"class_Id": 1, "class_Name": "human", "type": 1}"#).unwrap();
        assert_eq!(detail.name, None);
        assert_eq!(detail.display_name(), "human");
        assert_eq!(detail.icon_url(), None);
        assert_eq!(detail.category(), None);
        assert_eq!(detail.background_id(), crate::DEFAULT_BACKGROUND_ID);
    }

    #[test]
    fn negative_property_value_is_absent() {
        let detail: WeenieDetail = serde_json::from_str(
            r#"{"class_Id": 5, "class_Name": "x", "type": 1, "item_type": -1}"#,
        )
        .unwrap();
        assert_eq!(detail.item_type, None);
    }

    #[test]
    fn presentation_combines_derivations() {
        let detail: WeenieDetail = serde_json::from_str(detail_json()).unwrap();
        let presentation = detail.presentation();
        assert_eq!(presentation.category, Some(ItemCategory::MeleeWeapon));
        assert_eq!(presentation.background_id, 0x060011CB);
        assert_eq!(
            presentation.icon_url.as_deref(),
            Some(
                "https://dats.treestats.net/icons/100667446?scale=2\
                 &underlay=100667520&background=melee_weapon"
            )
        );
    }

    #[test]
    fn zero_icon_means_no_icon() {
        let detail: WeenieDetail = serde_json::from_str(
            r#"{"class_Id": 5, "class_Name": "x", "type": 1, "icon_id": 0}"#,
        )
        .unwrap();
        assert_eq!(detail.icon_layers(), None);
    }

    #[test]
    fn summary_display_name_falls_back_to_class_name() {
        let hits: Vec<WeenieSummary> = serde_json::from_str(
            r#"[{"class_Id": 1, "class_Name": "a", "name": "Apple"},
                {"class_Id": 2, "class_Name": "b", "name": null}]"#,
        )
        .unwrap();
        assert_eq!(hits[0].display_name(), "Apple");
        assert_eq!(hits[1].display_name(), "b");
    }
}
