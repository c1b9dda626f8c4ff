use rust_decimal::Decimal;

use crate::{
    AmenitiesDetail, HouseRules, ProximityItem, SleepingItem, Villa, responses,
};

use super::{coerce, entries::retain_filled, location::Coordinates};

/// Local state of the villa create/edit form. Numeric inputs are kept as
/// typed and coerced once, on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct VillaForm {
    pub name: String,
    pub description: String,
    pub price_per_night: String,
    pub bedrooms: String,
    pub guests: String,
    pub bathrooms: String,
    pub levels: String,
    pub pantry: String,
    pub land_area: String,
    pub building_area: String,
    pub pool_area: String,
    pub coordinates: Coordinates,
    pub image_url: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub house_rules: HouseRules,
    pub amenities: AmenitiesDetail,
    pub proximity: Vec<ProximityItem>,
    pub sleeping: Vec<SleepingItem>,
}

impl Default for VillaForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price_per_night: String::new(),
            bedrooms: String::new(),
            guests: String::new(),
            bathrooms: String::new(),
            levels: "1".into(),
            pantry: "1".into(),
            land_area: String::new(),
            building_area: String::new(),
            pool_area: String::new(),
            coordinates: Coordinates::default(),
            image_url: String::new(),
            images: Vec::new(),
            features: Vec::new(),
            house_rules: HouseRules::default(),
            amenities: AmenitiesDetail::new(),
            proximity: Vec::new(),
            sleeping: Vec::new(),
        }
    }
}

impl VillaForm {
    /// Append a gallery image; empty URLs are ignored.
    pub fn add_image(&mut self, url: String) {
        if !url.is_empty() {
            self.images.push(url);
        }
    }

    pub fn remove_image(&mut self, idx: usize) {
        if idx < self.images.len() {
            self.images.remove(idx);
        }
    }

    /// Assemble the submitted villa. Never fails: unusable numbers take
    /// their field's fallback and blank nested entries are dropped.
    pub fn to_villa(&self) -> Villa {
        let amenities_detail = (!self.amenities.is_empty())
            .then(|| self.amenities.clone());
        let mut villa = Villa {
            name: self.name.clone(),
            description: self.description.clone(),
            price_per_night: coerce::decimal_or(
                &self.price_per_night,
                Decimal::ZERO,
            ),
            bedrooms: coerce::int_or(&self.bedrooms, 1),
            guests: coerce::int_or(&self.guests, 2),
            bathrooms: coerce::int_or(&self.bathrooms, 1),
            levels: coerce::int_or(&self.levels, 1),
            pantry: coerce::int_or(&self.pantry, 0),
            land_area: coerce::float_or(&self.land_area, 0.0),
            building_area: coerce::float_or(&self.building_area, 0.0),
            pool_area: coerce::float_or(&self.pool_area, 0.0),
            latitude: coerce::float_or(&self.coordinates.latitude, -8.5),
            longitude: coerce::float_or(&self.coordinates.longitude, 115.2),
            image_url: self.image_url.clone(),
            images: self.images.clone(),
            features: self.features.clone(),
            house_rules: self.house_rules.clone(),
            amenities_detail,
            proximity_list: retain_filled(self.proximity.clone()),
            sleeping_arrangements: retain_filled(self.sleeping.clone()),
        };
        villa.normalize();
        villa
    }
}

impl From<&responses::Villa> for VillaForm {
    fn from(villa: &responses::Villa) -> Self {
        let v = &villa.villa_details;
        Self {
            name: v.name.clone(),
            description: v.description.clone(),
            price_per_night: v.price_per_night.to_string(),
            bedrooms: v.bedrooms.to_string(),
            guests: v.guests.to_string(),
            bathrooms: v.bathrooms.to_string(),
            levels: v.levels.to_string(),
            pantry: v.pantry.to_string(),
            land_area: v.land_area.to_string(),
            building_area: v.building_area.to_string(),
            pool_area: v.pool_area.to_string(),
            coordinates: Coordinates::new(
                v.latitude.to_string(),
                v.longitude.to_string(),
            ),
            image_url: v.image_url.clone(),
            images: v.images.clone(),
            features: v.features.clone(),
            house_rules: v.house_rules.clone(),
            amenities: v.amenities_detail.clone().unwrap_or_default(),
            proximity: v.proximity_list.clone().unwrap_or_default(),
            sleeping: v.sleeping_arrangements.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn unusable_numbers_take_fallbacks() {
        let form = VillaForm {
            name: "Villa Sawah".into(),
            bedrooms: "abc".into(),
            levels: String::new(),
            pantry: String::new(),
            ..Default::default()
        };
        let villa = form.to_villa();
        assert_eq!(villa.price_per_night, Decimal::ZERO);
        assert_eq!(villa.bedrooms, 1);
        assert_eq!(villa.guests, 2);
        assert_eq!(villa.bathrooms, 1);
        assert_eq!(villa.levels, 1);
        assert_eq!(villa.pantry, 0);
        assert_eq!(villa.land_area, 0.0);
        assert_eq!(villa.latitude, -8.5);
        assert_eq!(villa.longitude, 115.2);
    }

    #[test]
    fn new_form_keeps_initial_pantry() {
        let villa = VillaForm::default().to_villa();
        assert_eq!(villa.levels, 1);
        assert_eq!(villa.pantry, 1);
        assert_eq!(villa.house_rules, HouseRules::default());
    }

    #[test]
    fn typed_numbers_are_used() {
        let form = VillaForm {
            price_per_night: "3500000".into(),
            guests: "6".into(),
            pool_area: "24.5".into(),
            coordinates: Coordinates::new("-8.4312", "115.2792"),
            ..Default::default()
        };
        let villa = form.to_villa();
        assert_eq!(villa.price_per_night, dec!(3500000));
        assert_eq!(villa.guests, 6);
        assert_eq!(villa.pool_area, 24.5);
        assert_eq!(villa.latitude, -8.4312);
        assert_eq!(villa.longitude, 115.2792);
    }

    #[test]
    fn empty_nested_structures_become_none() {
        let form = VillaForm {
            proximity: vec![ProximityItem::default()],
            sleeping: vec![SleepingItem {
                room: " ".into(),
                bed: "1 King Bed".into(),
                view: String::new(),
            }],
            ..Default::default()
        };
        let villa = form.to_villa();
        assert_eq!(villa.amenities_detail, None);
        assert_eq!(villa.proximity_list, None);
        assert_eq!(villa.sleeping_arrangements, None);
    }

    #[test]
    fn nested_entries_are_filtered_in_order() {
        let mut form = VillaForm::default();
        form.proximity = vec![
            ProximityItem {
                name: "Ubud Palace".into(),
                distance: "5 min".into(),
            },
            ProximityItem::default(),
            ProximityItem {
                name: "Tegallalang".into(),
                distance: "20 min".into(),
            },
        ];
        form.amenities
            .insert("Kitchen".into(), vec!["Oven".into()]);
        form.amenities.insert("Family".into(), Vec::new());

        let villa = form.to_villa();
        let names: Vec<_> = villa
            .proximity_list
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Ubud Palace", "Tegallalang"]);
        let amenities = villa.amenities_detail.unwrap();
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities["Kitchen"], vec!["Oven"]);
    }

    #[test]
    fn gallery_ignores_empty_urls() {
        let mut form = VillaForm::default();
        form.add_image(String::new());
        form.add_image("https://img.example/1.jpg".into());
        form.add_image("https://img.example/2.jpg".into());
        form.remove_image(0);
        form.remove_image(7);
        assert_eq!(form.images, vec!["https://img.example/2.jpg"]);
    }

    #[test]
    fn edit_form_round_trips_a_villa() {
        let form = VillaForm {
            name: "Villa Bambu".into(),
            price_per_night: "2750000".into(),
            bedrooms: "3".into(),
            guests: "6".into(),
            bathrooms: "2".into(),
            levels: "2".into(),
            pantry: "1".into(),
            land_area: "400".into(),
            building_area: "220.5".into(),
            pool_area: "30".into(),
            coordinates: Coordinates::new("-8.5186", "115.2588"),
            features: vec!["WiFi".into()],
            ..Default::default()
        };
        let villa = form.to_villa();
        let saved = responses::Villa {
            villa_id: crate::VillaId(uuid::Uuid::nil()),
            villa_details: villa.clone(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };
        assert_eq!(VillaForm::from(&saved).to_villa(), villa);
    }
}
