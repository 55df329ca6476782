//! Seed entries for the demo lists.
//!
//! The demo starts with one reminder and one appointment so the list
//! screens have something to show before the user adds their own.

use wellkit_contracts::{
    appointment::{Appointment, AppointmentId, AppointmentStatus},
    reminder::{Frequency, Reminder, ReminderId},
};

/// The reminder list the demo starts with.
pub fn seed_reminders() -> Vec<Reminder> {
    vec![Reminder {
        id: ReminderId::new(),
        name: "Aspirin".to_string(),
        dosage: "100mg".to_string(),
        time: "08:00 AM".to_string(),
        frequency: Frequency::Daily,
    }]
}

/// The appointment book the demo starts with.
pub fn seed_appointments() -> Vec<Appointment> {
    vec![Appointment {
        id: AppointmentId::new(),
        doctor: "Dr. Sarah Johnson".to_string(),
        specialty: "Cardiologist".to_string(),
        date: "2025-10-20".to_string(),
        time: "10:00 AM".to_string(),
        location: "City General Hospital".to_string(),
        status: AppointmentStatus::Upcoming,
    }]
}

#[cfg(test)]
mod tests {
    use wellkit_contracts::appointment::AppointmentStatus;

    use super::{seed_appointments, seed_reminders};

    #[test]
    fn seeds_are_single_well_formed_entries() {
        let reminders = seed_reminders();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].name, "Aspirin");

        let appointments = seed_appointments();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0].status, AppointmentStatus::Upcoming);
    }
}
