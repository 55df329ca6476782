//! Appointment types.

use serde::{Deserialize, Serialize};

/// Unique identifier for an appointment within an `AppointmentBook`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub uuid::Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a visit is still ahead or already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

/// One booked medical visit.
///
/// `date` and `time` are display labels exactly as entered — the book does
/// not parse or order them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub doctor: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub status: AppointmentStatus,
}
