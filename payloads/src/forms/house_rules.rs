use crate::HouseRules;

use super::coerce;

/// A single edit made in the house rules editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HouseRulesEdit {
    CheckIn(String),
    CheckOut(String),
    QuietHours(String),
    /// Raw text from the max guests input.
    MaxGuests(String),
    ToggleParties,
    ToggleSmoking,
    TogglePets,
}

impl HouseRules {
    /// Apply one edit, returning the complete record to hand to the parent.
    pub fn apply(&self, edit: HouseRulesEdit) -> HouseRules {
        let mut next = self.clone();
        match edit {
            HouseRulesEdit::CheckIn(v) => next.check_in = v,
            HouseRulesEdit::CheckOut(v) => next.check_out = v,
            HouseRulesEdit::QuietHours(v) => next.quiet_hours = v,
            HouseRulesEdit::MaxGuests(v) => {
                next.max_guests = coerce::int_or(&v, 1)
            }
            HouseRulesEdit::ToggleParties => next.parties = !next.parties,
            HouseRulesEdit::ToggleSmoking => next.smoking = !next.smoking,
            HouseRulesEdit::TogglePets => next.pets = !next.pets,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rules = HouseRules::default();
        assert_eq!(rules.check_in, "14:00");
        assert_eq!(rules.check_out, "11:00");
        assert_eq!(rules.quiet_hours, "22:00 - 07:00");
        assert!(!rules.parties && !rules.smoking && !rules.pets);
        assert_eq!(rules.max_guests, 4);
    }

    #[test]
    fn toggle_flips_only_its_field() {
        let rules = HouseRules::default();
        let next = rules.apply(HouseRulesEdit::TogglePets);
        assert_eq!(
            next,
            HouseRules {
                pets: true,
                ..rules.clone()
            }
        );
        assert_eq!(next.apply(HouseRulesEdit::TogglePets), rules);
    }

    #[test]
    fn max_guests_falls_back_to_one() {
        let rules = HouseRules::default();
        assert_eq!(
            rules.apply(HouseRulesEdit::MaxGuests("8".into())).max_guests,
            8
        );
        assert_eq!(
            rules.apply(HouseRulesEdit::MaxGuests(String::new())).max_guests,
            1
        );
    }

    #[test]
    fn times_take_any_value() {
        let rules = HouseRules::default()
            .apply(HouseRulesEdit::CheckIn("15:30".into()))
            .apply(HouseRulesEdit::CheckOut(String::new()));
        assert_eq!(rules.check_in, "15:30");
        assert_eq!(rules.check_out, "");
        assert_eq!(rules.quiet_hours, "22:00 - 07:00");
    }
}
