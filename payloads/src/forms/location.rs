//! State behind the villa location picker.
//!
//! Coordinates are kept as the strings the user typed; they are only parsed
//! when the villa form is submitted.

/// Ubud center, used whenever a coordinate is unset.
pub const DEFAULT_LATITUDE: &str = "-8.5069";
pub const DEFAULT_LONGITUDE: &str = "115.2625";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetLocation {
    pub name: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
}

pub const PRESET_LOCATIONS: [PresetLocation; 4] = [
    PresetLocation {
        name: "Ubud Center",
        latitude: "-8.5069",
        longitude: "115.2625",
    },
    PresetLocation {
        name: "Tegallalang",
        latitude: "-8.4312",
        longitude: "115.2792",
    },
    PresetLocation {
        name: "Monkey Forest",
        latitude: "-8.5186",
        longitude: "115.2588",
    },
    PresetLocation {
        name: "Campuhan Ridge",
        latitude: "-8.5028",
        longitude: "115.2522",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Substitute the default location for unset coordinates.
    pub fn or_default_location(&self) -> Coordinates {
        let pick = |value: &str, default: &str| {
            if value.is_empty() { default } else { value }.to_string()
        };
        Coordinates {
            latitude: pick(&self.latitude, DEFAULT_LATITUDE),
            longitude: pick(&self.longitude, DEFAULT_LONGITUDE),
        }
    }

    /// Format a position reported by the platform geolocation API.
    pub fn from_position(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: format!("{latitude:.6}"),
            longitude: format!("{longitude:.6}"),
        }
    }

    pub fn matches_preset(&self, preset: &PresetLocation) -> bool {
        self.latitude == preset.latitude && self.longitude == preset.longitude
    }
}

impl From<&PresetLocation> for Coordinates {
    fn from(preset: &PresetLocation) -> Self {
        Self::new(preset.latitude, preset.longitude)
    }
}

/// Why the platform could not provide the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationFailure {
    Unsupported,
    Unavailable,
}

impl GeolocationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unsupported => "Geolocation is not supported by this browser.",
            Self::Unavailable => {
                "Could not get current location. Please enter coordinates manually."
            }
        }
    }
}

/// The modal's draft. Nothing here reaches the parent until [`apply`].
///
/// [`apply`]: LocationPicker::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPicker {
    pub is_open: bool,
    pub draft: Coordinates,
    pub search_query: String,
    pub alert: Option<GeolocationFailure>,
}

impl LocationPicker {
    /// Open the modal with a draft seeded from the applied coordinates.
    pub fn open(&mut self, applied: &Coordinates) {
        self.is_open = true;
        self.draft = applied.or_default_location();
        self.alert = None;
    }

    /// Close without committing; the draft is discarded.
    pub fn cancel(&mut self) {
        self.is_open = false;
        self.alert = None;
    }

    /// Close and return the draft for the parent to commit.
    pub fn apply(&mut self) -> Coordinates {
        self.is_open = false;
        self.alert = None;
        self.draft.clone()
    }

    pub fn set_draft_latitude(&mut self, latitude: String) {
        self.draft.latitude = latitude;
    }

    pub fn set_draft_longitude(&mut self, longitude: String) {
        self.draft.longitude = longitude;
    }

    pub fn pick_preset(&mut self, preset: &PresetLocation) {
        self.draft = preset.into();
    }

    pub fn position_found(&mut self, latitude: f64, longitude: f64) {
        self.draft = Coordinates::from_position(latitude, longitude);
        self.alert = None;
    }

    pub fn position_failed(&mut self, failure: GeolocationFailure) {
        self.alert = Some(failure);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// URL to open in a new browsing context for the current search, if any.
    pub fn search_url(&self) -> Option<String> {
        search_url(&self.search_query)
    }
}

/// Embedded map centered on the given coordinates.
pub fn embed_url(coordinates: &Coordinates) -> String {
    format!(
        "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3000!2d{lng}!3d{lat}\
         !2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zM!5e0\
         !3m2!1sen!2sid!4v1700000000000!5m2!1sen!2sid",
        lat = coordinates.latitude,
        lng = coordinates.longitude,
    )
}

/// External map search for a free-text query. Results are never read back;
/// the user copies coordinates by hand.
pub fn search_url(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/search/{}",
        urlencoding::encode(query)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_keeps_applied_coordinates() {
        let applied = Coordinates::new("-8.40", "115.10");
        let mut picker = LocationPicker::default();

        picker.open(&applied);
        picker.set_draft_latitude("-9.99".into());
        picker.pick_preset(&PRESET_LOCATIONS[1]);
        picker.cancel();

        assert!(!picker.is_open);
        assert_eq!(applied, Coordinates::new("-8.40", "115.10"));

        picker.open(&applied);
        assert_eq!(picker.draft, applied);
    }

    #[test]
    fn apply_returns_draft_exactly() {
        let mut picker = LocationPicker::default();
        picker.open(&Coordinates::default());
        picker.set_draft_latitude("-8.123".into());
        picker.set_draft_longitude("115.456".into());

        let applied = picker.apply();
        assert_eq!(applied, Coordinates::new("-8.123", "115.456"));
        assert!(!picker.is_open);
    }

    #[test]
    fn unset_coordinates_fall_back_to_ubud() {
        let mut picker = LocationPicker::default();
        picker.open(&Coordinates::new("", "115.3"));
        assert_eq!(picker.draft, Coordinates::new(DEFAULT_LATITUDE, "115.3"));
    }

    #[test]
    fn geolocation_fills_draft_with_six_decimals() {
        let mut picker = LocationPicker::default();
        picker.open(&Coordinates::default());
        picker.position_failed(GeolocationFailure::Unavailable);
        assert!(picker.alert.is_some());

        picker.position_found(-8.50691234, 115.2625);
        assert_eq!(picker.draft, Coordinates::new("-8.506912", "115.262500"));
        assert_eq!(picker.alert, None);
    }

    #[test]
    fn preset_selection_is_detectable() {
        let mut picker = LocationPicker::default();
        picker.open(&Coordinates::default());
        picker.pick_preset(&PRESET_LOCATIONS[2]);
        assert!(picker.draft.matches_preset(&PRESET_LOCATIONS[2]));
        assert!(!picker.draft.matches_preset(&PRESET_LOCATIONS[0]));
    }

    #[test]
    fn urls() {
        assert_eq!(search_url(""), None);
        assert_eq!(
            search_url("Ubud Palace, Bali").as_deref(),
            Some("https://www.google.com/maps/search/Ubud%20Palace%2C%20Bali")
        );
        assert_eq!(
            search_url("Villa A+B & Spa").as_deref(),
            Some("https://www.google.com/maps/search/Villa%20A%2BB%20%26%20Spa")
        );
        let embed = embed_url(&Coordinates::new("-8.5", "115.2"));
        assert!(embed.contains("!2d115.2!3d-8.5!"));
    }
}
