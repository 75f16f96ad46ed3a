/// Item-type classification for weenies.
///
/// The ACE `ItemType` property is a bit-flag. Each category here owns exactly
/// one bit, and lookups match the raw value exactly: a value carrying several
/// bits at once is simply unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    MeleeWeapon,
    Armor,
    Clothing,
    Jewelry,
    Creature,
    Food,
    Money,
    Misc,
    MissileWeapon,
    Container,
    Gem,
    SpellComponents,
    Key,
    Caster,
    Portal,
    PromissoryNote,
    ManaStone,
    Service,
}

/// Background asset used when an item type has no dedicated background.
pub const DEFAULT_BACKGROUND_ID: u32 = 0x060011D4;

/// All category variants in flag order.
const ALL_CATEGORIES: &[ItemCategory] = &[
    ItemCategory::MeleeWeapon,
    ItemCategory::Armor,
    ItemCategory::Clothing,
    ItemCategory::Jewelry,
    ItemCategory::Creature,
    ItemCategory::Food,
    ItemCategory::Money,
    ItemCategory::Misc,
    ItemCategory::MissileWeapon,
    ItemCategory::Container,
    ItemCategory::Gem,
    ItemCategory::SpellComponents,
    ItemCategory::Key,
    ItemCategory::Caster,
    ItemCategory::Portal,
    ItemCategory::PromissoryNote,
    ItemCategory::ManaStone,
    ItemCategory::Service,
];

impl ItemCategory {
    /// Resolve a raw item-type value. Only exact single-bit matches resolve.
    pub fn from_flag(flag: u32) -> Option<Self> {
        match flag {
            0x1 => Some(Self::MeleeWeapon),
            0x2 => Some(Self::Armor),
            0x4 => Some(Self::Clothing),
            0x8 => Some(Self::Jewelry),
            0x10 => Some(Self::Creature),
            0x20 => Some(Self::Food),
            0x40 => Some(Self::Money),
            0x80 => Some(Self::Misc),
            0x100 => Some(Self::MissileWeapon),
            0x200 => Some(Self::Container),
            0x800 => Some(Self::Gem),
            0x1000 => Some(Self::SpellComponents),
            0x2000 => Some(Self::Key),
            0x4000 => Some(Self::Caster),
            0x8000 => Some(Self::Portal),
            0x20000 => Some(Self::PromissoryNote),
            0x40000 => Some(Self::ManaStone),
            0x80000 => Some(Self::Service),
            _ => None,
        }
    }

    /// The item-type bit this category corresponds to.
    pub fn flag(&self) -> u32 {
        match self {
            Self::MeleeWeapon => 0x1,
            Self::Armor => 0x2,
            Self::Clothing => 0x4,
            Self::Jewelry => 0x8,
            Self::Creature => 0x10,
            Self::Food => 0x20,
            Self::Money => 0x40,
            Self::Misc => 0x80,
            Self::MissileWeapon => 0x100,
            Self::Container => 0x200,
            Self::Gem => 0x800,
            Self::SpellComponents => 0x1000,
            Self::Key => 0x2000,
            Self::Caster => 0x4000,
            Self::Portal => 0x8000,
            Self::PromissoryNote => 0x20000,
            Self::ManaStone => 0x40000,
            Self::Service => 0x80000,
        }
    }

    /// Name understood by the icon service's `background` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MeleeWeapon => "melee_weapon",
            Self::Armor => "armor",
            Self::Clothing => "clothing",
            Self::Jewelry => "jewelry",
            Self::Creature => "creature",
            Self::Food => "food",
            Self::Money => "money",
            Self::Misc => "misc",
            Self::MissileWeapon => "missile_weapon",
            Self::Container => "container",
            Self::Gem => "gem",
            Self::SpellComponents => "spell_components",
            Self::Key => "key",
            Self::Caster => "caster",
            Self::Portal => "portal",
            Self::PromissoryNote => "promissory_note",
            Self::ManaStone => "mana_stone",
            Self::Service => "service",
        }
    }

    /// Dedicated background texture in the portal dat, if this category has one.
    ///
    /// Key, caster, portal, promissory note and mana stone have no entry and
    /// render on the default background.
    pub fn background_id(&self) -> Option<u32> {
        match self {
            Self::MeleeWeapon => Some(0x060011CB),
            Self::Armor => Some(0x060011CF),
            Self::Clothing => Some(0x060011F3),
            Self::Jewelry => Some(0x060011D5),
            Self::Creature => Some(0x060011D1),
            Self::Food => Some(0x060011CC),
            Self::Money => Some(0x060011F4),
            Self::Misc => Some(0x060011D0),
            Self::MissileWeapon => Some(0x060011D2),
            Self::Container => Some(0x060011CE),
            Self::Gem => Some(0x060011D3),
            Self::SpellComponents => Some(0x060011CD),
            Self::Service => Some(0x06005E23),
            Self::Key | Self::Caster | Self::Portal | Self::PromissoryNote | Self::ManaStone => {
                None
            }
        }
    }

    /// All 18 category variants.
    pub fn all() -> &'static [ItemCategory] {
        ALL_CATEGORIES
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known category name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown item category: '{0}'")]
pub struct ItemCategoryParseError(pub String);

impl std::str::FromStr for ItemCategory {
    type Err = ItemCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ItemCategoryParseError(s.to_string()))
    }
}

/// Category for an optional item-type value.
///
/// Absent and unmapped values both yield `None`; no "unknown" category exists.
pub fn category_of(flag: Option<u32>) -> Option<ItemCategory> {
    flag.and_then(ItemCategory::from_flag)
}

/// Background asset for an optional item-type value.
///
/// Unlike [`category_of`], this never returns nothing: absent, unmapped and
/// background-less categories all resolve to [`DEFAULT_BACKGROUND_ID`].
pub fn background_of(flag: Option<u32>) -> u32 {
    category_of(flag)
        .and_then(|c| c.background_id())
        .unwrap_or(DEFAULT_BACKGROUND_ID)
}

#[cfg(test)]
#[path = "tests/item_type_tests.rs"]
mod tests;
