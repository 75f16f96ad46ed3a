//! SQL text for the ACE world database schema.
//!
//! Weenie properties are spread across per-type tables keyed by
//! `(object_Id, type)`, so every property we read is a left join filtered on
//! its property type id.

use reqwest::Url;

use crate::error::AceDbError;

/// `PropertyString` ids.
pub mod property_string {
    pub const NAME: u32 = 1;
}

/// `PropertyDataId` ids.
pub mod property_data_id {
    pub const ICON: u32 = 8;
    pub const ICON_OVERLAY: u32 = 50;
    pub const ICON_OVERLAY_SECONDARY: u32 = 51;
    pub const ICON_UNDERLAY: u32 = 52;
}

/// `PropertyInt` ids.
pub mod property_int {
    pub const ITEM_TYPE: u32 = 1;
}

/// Escape text for use inside a single-quoted SQL string literal.
pub fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// Escape `LIKE` wildcards so the text matches literally under `ESCAPE '\'`.
pub fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Case-insensitive substring search over class names and display names.
///
/// SQLite's `LIKE` is case-insensitive for ASCII, which covers weenie names.
/// `%` and `_` in the query match themselves.
pub fn search_sql(query: &str, limit: u32) -> String {
    let escaped = escape_literal(&escape_like(query));
    format!(
        "SELECT w.class_Id, w.class_Name, s.value as name \
         FROM weenie w \
         LEFT JOIN weenie_properties_string s ON w.class_Id = s.object_Id AND s.type = {name} \
         WHERE s.value LIKE '%{escaped}%' ESCAPE '\\' \
         OR w.class_Name LIKE '%{escaped}%' ESCAPE '\\' \
         LIMIT {limit}",
        name = property_string::NAME,
    )
}

/// One weenie row with its name, icon layers and item type.
pub fn detail_sql(class_id: u32) -> String {
    use property_data_id::{ICON, ICON_OVERLAY, ICON_OVERLAY_SECONDARY, ICON_UNDERLAY};

    let mut sql = String::from(
        "SELECT w.*, s.value as name, \
         icon.value as icon_id, \
         overlay.value as icon_overlay, \
         overlay2.value as icon_overlay2, \
         underlay.value as icon_underlay, \
         item_type.value as item_type \
         FROM weenie w",
    );
    sql.push_str(&format!(
        " LEFT JOIN weenie_properties_string s ON w.class_Id = s.object_Id AND s.type = {}",
        property_string::NAME
    ));
    for (alias, property) in [
        ("icon", ICON),
        ("overlay", ICON_OVERLAY),
        ("overlay2", ICON_OVERLAY_SECONDARY),
        ("underlay", ICON_UNDERLAY),
    ] {
        sql.push_str(&format!(
            " LEFT JOIN weenie_properties_d_i_d {alias} \
             ON w.class_Id = {alias}.object_Id AND {alias}.type = {property}"
        ));
    }
    sql.push_str(&format!(
        " LEFT JOIN weenie_properties_int item_type \
         ON w.class_Id = item_type.object_Id AND item_type.type = {}",
        property_int::ITEM_TYPE
    ));
    sql.push_str(&format!(" WHERE w.class_Id = {class_id}"));
    sql
}

/// Request URL for a statement, asking for the bare JSON array shape.
pub fn query_url(base_url: &str, sql: &str) -> Result<Url, AceDbError> {
    Url::parse_with_params(base_url, &[("sql", sql), ("_shape", "array")])
        .map_err(|e| AceDbError::config(format!("Invalid base URL '{base_url}': {e}")))
}

#[cfg(test)]
#[path = "tests/sql_tests.rs"]
mod tests;
