use std::collections::{BTreeMap, BTreeSet};

use crate::AmenitiesDetail;

/// Categories offered even before they hold any items.
pub const DEFAULT_AMENITY_CATEGORIES: [&str; 5] =
    ["Bathroom", "Bedroom", "Entertainment", "Kitchen", "Outdoor"];

/// Transient state of the amenities editor. The amenities themselves are
/// owned by the parent form; each operation returns the next value to hand
/// back, or `None` when the operation was a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenitiesEditor {
    pending_items: BTreeMap<String, String>,
    pending_category: String,
    /// Default categories emptied in this session; hidden until re-added.
    hidden_defaults: BTreeSet<String>,
}

impl AmenitiesEditor {
    pub fn pending_item(&self, category: &str) -> &str {
        self.pending_items
            .get(category)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set_pending_item(&mut self, category: &str, text: String) {
        self.pending_items.insert(category.to_string(), text);
    }

    pub fn pending_category(&self) -> &str {
        &self.pending_category
    }

    pub fn set_pending_category(&mut self, text: String) {
        self.pending_category = text;
    }

    /// Append the category's pending input as a new item.
    pub fn add_item(
        &mut self,
        value: &AmenitiesDetail,
        category: &str,
    ) -> Option<AmenitiesDetail> {
        let item = self.pending_item(category).trim().to_string();
        if item.is_empty() {
            return None;
        }
        let current = value.get(category).map(Vec::as_slice).unwrap_or(&[]);
        if current.contains(&item) {
            return None;
        }

        let mut next = value.clone();
        next.entry(category.to_string()).or_default().push(item);
        self.pending_items.insert(category.to_string(), String::new());
        self.hidden_defaults.remove(category);
        Some(next)
    }

    /// Remove the item at `idx`. A category left without items is removed
    /// from the mapping entirely, default or not.
    pub fn remove_item(
        &mut self,
        value: &AmenitiesDetail,
        category: &str,
        idx: usize,
    ) -> Option<AmenitiesDetail> {
        let items = value.get(category)?;
        if idx >= items.len() {
            return None;
        }

        let mut next = value.clone();
        let remaining = next.entry(category.to_string()).or_default();
        remaining.remove(idx);
        if remaining.is_empty() {
            next.remove(category);
            if DEFAULT_AMENITY_CATEGORIES.contains(&category) {
                self.hidden_defaults.insert(category.to_string());
            }
        }
        Some(next)
    }

    /// Add the pending category name with no items. It stays visible for
    /// editing, but is dropped on save if nothing is added to it.
    pub fn add_category(
        &mut self,
        value: &AmenitiesDetail,
    ) -> Option<AmenitiesDetail> {
        let category = self.pending_category.trim().to_string();
        if category.is_empty() || value.contains_key(&category) {
            return None;
        }

        let mut next = value.clone();
        next.insert(category.clone(), Vec::new());
        self.hidden_defaults.remove(&category);
        self.pending_category.clear();
        Some(next)
    }

    /// Categories to render: the visible defaults in their fixed order, then
    /// every other category present in the value.
    pub fn categories(&self, value: &AmenitiesDetail) -> Vec<String> {
        let defaults = DEFAULT_AMENITY_CATEGORIES
            .iter()
            .filter(|c| {
                value.contains_key(**c) || !self.hidden_defaults.contains(**c)
            })
            .map(|c| c.to_string());
        let others = value
            .keys()
            .filter(|c| !DEFAULT_AMENITY_CATEGORIES.contains(&c.as_str()))
            .cloned();
        defaults.chain(others).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(
        editor: &mut AmenitiesEditor,
        value: &AmenitiesDetail,
        category: &str,
        item: &str,
    ) -> Option<AmenitiesDetail> {
        editor.set_pending_item(category, item.to_string());
        editor.add_item(value, category)
    }

    #[test]
    fn add_item_trims_appends_and_clears_input() {
        let mut editor = AmenitiesEditor::default();
        let value = add(&mut editor, &BTreeMap::new(), "Kitchen", "  Oven ")
            .unwrap();
        let value = add(&mut editor, &value, "Kitchen", "Blender").unwrap();
        assert_eq!(value["Kitchen"], vec!["Oven", "Blender"]);
        assert_eq!(editor.pending_item("Kitchen"), "");
    }

    #[test]
    fn add_item_ignores_blank_and_duplicates() {
        let mut editor = AmenitiesEditor::default();
        let value =
            add(&mut editor, &BTreeMap::new(), "Kitchen", "Oven").unwrap();
        assert_eq!(add(&mut editor, &value, "Kitchen", "   "), None);
        assert_eq!(add(&mut editor, &value, "Kitchen", "Oven"), None);
        // a rejected duplicate keeps what the user typed
        assert_eq!(editor.pending_item("Kitchen"), "Oven");
        // exact match only
        let value = add(&mut editor, &value, "Kitchen", "oven").unwrap();
        assert_eq!(value["Kitchen"], vec!["Oven", "oven"]);
    }

    #[test]
    fn emptied_custom_category_is_removed() {
        let mut editor = AmenitiesEditor::default();
        editor.set_pending_category("Safety".into());
        let value = editor.add_category(&BTreeMap::new()).unwrap();
        let value = add(&mut editor, &value, "Safety", "First aid kit").unwrap();

        let value = editor.remove_item(&value, "Safety", 0).unwrap();
        assert!(!value.contains_key("Safety"));
        assert!(!editor.categories(&value).contains(&"Safety".to_string()));
    }

    #[test]
    fn emptied_default_category_is_removed_too() {
        let mut editor = AmenitiesEditor::default();
        let value =
            add(&mut editor, &BTreeMap::new(), "Kitchen", "Oven").unwrap();
        let value = editor.remove_item(&value, "Kitchen", 0).unwrap();
        assert!(!value.contains_key("Kitchen"));
        assert!(value.is_empty());
        assert!(!editor.categories(&value).contains(&"Kitchen".to_string()));

        editor.set_pending_category("Kitchen".into());
        let value = editor.add_category(&value).unwrap();
        assert!(editor.categories(&value).contains(&"Kitchen".to_string()));
    }

    #[test]
    fn remove_keeps_other_items_in_order() {
        let mut editor = AmenitiesEditor::default();
        let mut value = BTreeMap::new();
        value.insert(
            "Outdoor".to_string(),
            vec!["Pool".into(), "Gazebo".into(), "BBQ".into()],
        );
        let value = editor.remove_item(&value, "Outdoor", 1).unwrap();
        assert_eq!(value["Outdoor"], vec!["Pool", "BBQ"]);
        assert_eq!(editor.remove_item(&value, "Outdoor", 9), None);
        assert_eq!(editor.remove_item(&value, "Nowhere", 0), None);
    }

    #[test]
    fn add_category_rules() {
        let mut editor = AmenitiesEditor::default();
        editor.set_pending_category("   ".into());
        assert_eq!(editor.add_category(&BTreeMap::new()), None);

        editor.set_pending_category(" Family ".into());
        let value = editor.add_category(&BTreeMap::new()).unwrap();
        assert_eq!(value["Family"], Vec::<String>::new());
        assert_eq!(editor.pending_category(), "");

        editor.set_pending_category("Family".into());
        assert_eq!(editor.add_category(&value), None);
    }

    #[test]
    fn displayed_categories_union_defaults_and_value() {
        let editor = AmenitiesEditor::default();
        let mut value = BTreeMap::new();
        value.insert("Safety".to_string(), vec!["Smoke alarm".to_string()]);
        value.insert("Kitchen".to_string(), vec!["Oven".to_string()]);
        assert_eq!(
            editor.categories(&value),
            vec![
                "Bathroom",
                "Bedroom",
                "Entertainment",
                "Kitchen",
                "Outdoor",
                "Safety"
            ]
        );
    }
}
