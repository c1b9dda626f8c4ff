//! Editors for the ordered, fixed-shape villa lists: nearby places and
//! sleeping arrangements.
//!
//! Editing never filters anything. Blank entries are only dropped when the
//! owning form assembles its payload, via [`retain_filled`].

use crate::{ProximityItem, SleepingItem};

/// Bed types offered by the sleeping arrangements editor.
pub const BED_OPTIONS: [&str; 6] = [
    "1 King Bed",
    "1 Queen Bed",
    "2 Twin Beds",
    "1 Single Bed",
    "1 Sofa Bed",
    "Bunk Beds",
];

/// A record in one of the villa list editors.
pub trait Entry: Clone + Default {
    type Field: Copy;

    fn set(&mut self, field: Self::Field, value: String);

    /// Entries without their identifying field are not persisted.
    fn is_blank(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityField {
    Name,
    Distance,
}

impl Entry for ProximityItem {
    type Field = ProximityField;

    fn set(&mut self, field: ProximityField, value: String) {
        match field {
            ProximityField::Name => self.name = value,
            ProximityField::Distance => self.distance = value,
        }
    }

    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepingField {
    Room,
    Bed,
    View,
}

impl Entry for SleepingItem {
    type Field = SleepingField;

    fn set(&mut self, field: SleepingField, value: String) {
        match field {
            SleepingField::Room => self.room = value,
            SleepingField::Bed => self.bed = value,
            SleepingField::View => self.view = value,
        }
    }

    fn is_blank(&self) -> bool {
        self.room.trim().is_empty()
    }
}

/// Append one blank record.
pub fn add_entry<T: Entry>(list: &[T]) -> Vec<T> {
    let mut next = list.to_vec();
    next.push(T::default());
    next
}

/// Replace one field of the record at `idx`, keeping its other fields.
/// Out of range positions leave the list as it was.
pub fn update_entry<T: Entry>(
    list: &[T],
    idx: usize,
    field: T::Field,
    value: String,
) -> Vec<T> {
    let mut next = list.to_vec();
    if let Some(entry) = next.get_mut(idx) {
        entry.set(field, value);
    }
    next
}

/// Delete the record at `idx`; later records shift down by one.
pub fn remove_entry<T: Entry>(list: &[T], idx: usize) -> Vec<T> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != idx)
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Drop blank records; `None` when nothing is left.
pub fn retain_filled<T: Entry>(list: Vec<T>) -> Option<Vec<T>> {
    let filled: Vec<T> = list.into_iter().filter(|e| !e.is_blank()).collect();
    (!filled.is_empty()).then_some(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, distance: &str) -> ProximityItem {
        ProximityItem {
            name: name.into(),
            distance: distance.into(),
        }
    }

    #[test]
    fn add_appends_blank_record() {
        let list = add_entry(&[place("Ubud Market", "10 min")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1], ProximityItem::default());
    }

    #[test]
    fn update_keeps_other_fields() {
        let list = vec![place("Ubud Market", "10 min"), place("Beach", "")];
        let list =
            update_entry(&list, 1, ProximityField::Distance, "1 hour".into());
        assert_eq!(list[0], place("Ubud Market", "10 min"));
        assert_eq!(list[1], place("Beach", "1 hour"));

        let unchanged =
            update_entry(&list, 5, ProximityField::Name, "nowhere".into());
        assert_eq!(unchanged, list);
    }

    #[test]
    fn remove_shifts_later_records() {
        let list = vec![place("a", "1"), place("b", "2"), place("c", "3")];
        let list = remove_entry(&list, 1);
        assert_eq!(list, vec![place("a", "1"), place("c", "3")]);
    }

    #[test]
    fn sleeping_update_touches_one_field() {
        let list = add_entry::<SleepingItem>(&[]);
        let list = update_entry(&list, 0, SleepingField::Room, "Bedroom 1".into());
        let list = update_entry(&list, 0, SleepingField::Bed, BED_OPTIONS[0].into());
        assert_eq!(
            list[0],
            SleepingItem {
                room: "Bedroom 1".into(),
                bed: "1 King Bed".into(),
                view: String::new(),
            }
        );
    }

    #[test]
    fn blank_entries_are_filtered_at_submit() {
        let list = vec![place("  ", "5 min"), place("Rice terrace", "2 km")];
        assert_eq!(
            retain_filled(list),
            Some(vec![place("Rice terrace", "2 km")])
        );

        let blanks = vec![ProximityItem::default(), place(" ", "far")];
        assert_eq!(retain_filled(blanks), None);

        let sleeping = vec![SleepingItem {
            room: String::new(),
            bed: "1 King Bed".into(),
            view: "Jungle".into(),
        }];
        assert_eq!(retain_filled(sleeping), None);
    }
}
