/// One-click features offered below the tag input.
pub const FEATURE_PRESETS: [&str; 14] = [
    "Private Pool",
    "Rice Field View",
    "WiFi",
    "AC",
    "Kitchen",
    "Jungle View",
    "Garden",
    "Parking",
    "BBQ Area",
    "Bathtub",
    "Breakfast Included",
    "24/7 Service",
    "Laundry",
    "Yoga Deck",
];

/// Keys the tag input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    /// Commits the typed text as a tag.
    Commit,
    /// Removes the last tag when nothing has been typed.
    Delete,
    Other,
}

impl TagKey {
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "Enter" => Self::Commit,
            "Backspace" => Self::Delete,
            _ => Self::Other,
        }
    }
}

/// Result of a key press in the tag input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// New tags to hand to the parent, if they changed.
    pub tags: Option<Vec<String>>,
    /// Whether the key's default action should be suppressed.
    pub prevent_default: bool,
}

/// Text typed into the tag input but not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTagInput {
    pub input: String,
}

/// Add `tag` unless it is blank or already present.
pub fn add_tag(tags: &[String], tag: &str) -> Option<Vec<String>> {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return None;
    }
    let mut next = tags.to_vec();
    next.push(tag.to_string());
    Some(next)
}

pub fn remove_tag(tags: &[String], idx: usize) -> Vec<String> {
    tags.iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, t)| t.clone())
        .collect()
}

/// Presets that are not already tags, in preset order.
pub fn available_presets(tags: &[String]) -> Vec<&'static str> {
    FEATURE_PRESETS
        .into_iter()
        .filter(|p| !tags.iter().any(|t| t == p))
        .collect()
}

impl FeatureTagInput {
    pub fn on_key(&mut self, tags: &[String], key: TagKey) -> KeyOutcome {
        match key {
            TagKey::Commit => {
                let next = add_tag(tags, &self.input);
                self.input.clear();
                KeyOutcome {
                    tags: next,
                    prevent_default: true,
                }
            }
            TagKey::Delete if self.input.is_empty() && !tags.is_empty() => {
                KeyOutcome {
                    tags: Some(remove_tag(tags, tags.len() - 1)),
                    prevent_default: false,
                }
            }
            _ => KeyOutcome {
                tags: None,
                prevent_default: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let once = add_tag(&[], "WiFi").unwrap();
        assert_eq!(add_tag(&once, "WiFi"), None);
        assert_eq!(add_tag(&once, " WiFi "), None);
        assert_eq!(once, tags(&["WiFi"]));
        assert_eq!(add_tag(&once, "wifi"), Some(tags(&["WiFi", "wifi"])));
    }

    #[test]
    fn present_presets_are_hidden() {
        let current = tags(&["WiFi", "Sauna"]);
        let presets = available_presets(&current);
        assert!(!presets.contains(&"WiFi"));
        assert_eq!(presets.len(), FEATURE_PRESETS.len() - 1);
        assert_eq!(presets[0], "Private Pool");

        let all: Vec<String> =
            FEATURE_PRESETS.iter().map(|p| p.to_string()).collect();
        assert!(available_presets(&all).is_empty());
    }

    #[test]
    fn commit_key_adds_and_clears_input() {
        let mut input = FeatureTagInput {
            input: " Sauna ".into(),
        };
        let outcome = input.on_key(&tags(&["WiFi"]), TagKey::Commit);
        assert_eq!(outcome.tags, Some(tags(&["WiFi", "Sauna"])));
        assert!(outcome.prevent_default);
        assert_eq!(input.input, "");

        input.input = "WiFi".into();
        let outcome = input.on_key(&tags(&["WiFi"]), TagKey::Commit);
        assert_eq!(outcome.tags, None);
        assert_eq!(input.input, "");
    }

    #[test]
    fn delete_key_removes_last_tag_only_when_input_empty() {
        let mut input = FeatureTagInput::default();
        let current = tags(&["WiFi", "AC"]);
        let outcome = input.on_key(&current, TagKey::Delete);
        assert_eq!(outcome.tags, Some(tags(&["WiFi"])));

        input.input = "Ga".into();
        assert_eq!(input.on_key(&current, TagKey::Delete).tags, None);

        input.input.clear();
        assert_eq!(input.on_key(&[], TagKey::Delete).tags, None);
    }

    #[test]
    fn key_names() {
        assert_eq!(TagKey::from_key_name("Enter"), TagKey::Commit);
        assert_eq!(TagKey::from_key_name("Backspace"), TagKey::Delete);
        assert_eq!(TagKey::from_key_name("a"), TagKey::Other);
    }
}
