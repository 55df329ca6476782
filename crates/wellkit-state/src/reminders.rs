//! Medicine reminder list.
//!
//! Plain CRUD over an ordered collection keyed by a generated identifier.
//! The only invariant is that identifiers are unique within the list and the
//! list reflects the last edit.

use tracing::info;

use wellkit_contracts::{
    error::{WellkitError, WellkitResult},
    reminder::{Frequency, Reminder, ReminderId},
};

/// The user's medicine reminders, in insertion order.
#[derive(Debug, Default)]
pub struct ReminderList {
    entries: Vec<Reminder>,
}

impl ReminderList {
    /// Start empty.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Start from pre-seeded entries (see `wellkit-data`).
    pub fn with_entries(entries: Vec<Reminder>) -> Self {
        Self { entries }
    }

    /// Add a reminder, returning its generated id.
    ///
    /// Name and time are required; dosage may be empty.
    pub fn add(
        &mut self,
        name: &str,
        dosage: &str,
        time: &str,
        frequency: Frequency,
    ) -> WellkitResult<ReminderId> {
        let name = name.trim();
        let time = time.trim();
        if name.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "medicine name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if time.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "time".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let id = ReminderId::new();
        info!(name = %name, frequency = frequency.label(), "reminder added");
        self.entries.push(Reminder {
            id: id.clone(),
            name: name.to_string(),
            dosage: dosage.trim().to_string(),
            time: time.to_string(),
            frequency,
        });
        Ok(id)
    }

    /// Remove the reminder with the given id.
    pub fn remove(&mut self, id: &ReminderId) -> WellkitResult<()> {
        let before = self.entries.len();
        self.entries.retain(|r| &r.id != id);
        if self.entries.len() == before {
            return Err(WellkitError::UnknownEntry {
                id: id.0.to_string(),
            });
        }
        info!(id = %id.0, "reminder removed");
        Ok(())
    }

    /// All reminders, in insertion order.
    pub fn entries(&self) -> &[Reminder] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wellkit_contracts::reminder::Frequency;

    use super::ReminderList;

    #[test]
    fn add_assigns_unique_ids() {
        let mut list = ReminderList::new();
        let a = list.add("Aspirin", "100mg", "08:00 AM", Frequency::Daily).unwrap();
        let b = list.add("Aspirin", "100mg", "08:00 AM", Frequency::Daily).unwrap();

        assert_ne!(a, b, "identical entries still get distinct ids");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_reflects_last_edit() {
        let mut list = ReminderList::new();
        let a = list.add("Aspirin", "100mg", "08:00 AM", Frequency::Daily).unwrap();
        let _b = list.add("Metformin", "500mg", "09:00 PM", Frequency::TwiceDaily).unwrap();

        list.remove(&a).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].name, "Metformin");
    }

    #[test]
    fn remove_unknown_id_errors() {
        let mut list = ReminderList::new();
        let a = list.add("Aspirin", "100mg", "08:00 AM", Frequency::Daily).unwrap();
        list.remove(&a).unwrap();

        assert!(list.remove(&a).is_err());
    }

    #[test]
    fn add_requires_name_and_time() {
        let mut list = ReminderList::new();
        assert!(list.add("", "100mg", "08:00 AM", Frequency::Daily).is_err());
        assert!(list.add("Aspirin", "100mg", "  ", Frequency::Daily).is_err());
        // Dosage is optional.
        assert!(list.add("Aspirin", "", "08:00 AM", Frequency::Daily).is_ok());
    }
}
