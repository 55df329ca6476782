//! Appointment book.
//!
//! Same CRUD shape as the reminder list: ordered entries, generated unique
//! identifiers, no invariants beyond "the list reflects the last edit".

use tracing::info;

use wellkit_contracts::{
    appointment::{Appointment, AppointmentId, AppointmentStatus},
    error::{WellkitError, WellkitResult},
};

/// The user's booked visits, in insertion order.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    entries: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Start from pre-seeded entries (see `wellkit-data`).
    pub fn with_entries(entries: Vec<Appointment>) -> Self {
        Self { entries }
    }

    /// Book a visit, returning its generated id.  New bookings start as
    /// `Upcoming`.
    ///
    /// Doctor, date, and time are required; specialty and location may be
    /// empty.
    pub fn book(
        &mut self,
        doctor: &str,
        specialty: &str,
        date: &str,
        time: &str,
        location: &str,
    ) -> WellkitResult<AppointmentId> {
        let doctor = doctor.trim();
        let date = date.trim();
        let time = time.trim();
        for (field, value) in [("doctor", doctor), ("date", date), ("time", time)] {
            if value.is_empty() {
                return Err(WellkitError::InvalidEntry {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        let id = AppointmentId::new();
        info!(doctor = %doctor, date = %date, "appointment booked");
        self.entries.push(Appointment {
            id: id.clone(),
            doctor: doctor.to_string(),
            specialty: specialty.trim().to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.trim().to_string(),
            status: AppointmentStatus::Upcoming,
        });
        Ok(id)
    }

    /// Cancel (remove) the appointment with the given id.
    pub fn cancel(&mut self, id: &AppointmentId) -> WellkitResult<()> {
        let before = self.entries.len();
        self.entries.retain(|a| &a.id != id);
        if self.entries.len() == before {
            return Err(WellkitError::UnknownEntry {
                id: id.0.to_string(),
            });
        }
        info!(id = %id.0, "appointment cancelled");
        Ok(())
    }

    /// All appointments, in insertion order.
    pub fn entries(&self) -> &[Appointment] {
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
    use wellkit_contracts::appointment::AppointmentStatus;

    use super::AppointmentBook;

    #[test]
    fn book_starts_upcoming_with_unique_ids() {
        let mut book = AppointmentBook::new();
        let a = book
            .book("Dr. Sarah Johnson", "Cardiologist", "2025-10-20", "10:00 AM", "Heart Center")
            .unwrap();
        let b = book
            .book("Dr. Sarah Johnson", "Cardiologist", "2025-10-20", "10:00 AM", "Heart Center")
            .unwrap();

        assert_ne!(a, b);
        assert!(book
            .entries()
            .iter()
            .all(|appt| appt.status == AppointmentStatus::Upcoming));
    }

    #[test]
    fn cancel_reflects_last_edit() {
        let mut book = AppointmentBook::new();
        let a = book
            .book("Dr. Rivera", "Internal Medicine", "2025-11-02", "09:30 AM", "Main Clinic")
            .unwrap();

        book.cancel(&a).unwrap();
        assert!(book.is_empty());
        assert!(book.cancel(&a).is_err());
    }

    #[test]
    fn book_requires_doctor_date_and_time() {
        let mut book = AppointmentBook::new();
        assert!(book.book("", "Cardiologist", "2025-10-20", "10:00 AM", "").is_err());
        assert!(book.book("Dr. Rivera", "", "", "10:00 AM", "").is_err());
        assert!(book.book("Dr. Rivera", "", "2025-10-20", "", "").is_err());
        // Specialty and location are optional.
        assert!(book.book("Dr. Rivera", "", "2025-10-20", "10:00 AM", "").is_ok());
    }
}
