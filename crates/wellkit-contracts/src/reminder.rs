//! Medicine reminder types.

use serde::{Deserialize, Serialize};

use crate::error::WellkitError;

/// Unique identifier for a reminder within a `ReminderList`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(pub uuid::Uuid);

impl ReminderId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

/// How often a medicine is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    Weekly,
}

impl Frequency {
    /// Display label for list rows and the add form.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::TwiceDaily => "Twice Daily",
            Frequency::Weekly => "Weekly",
        }
    }

    /// The next frequency in form-toggle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Frequency::Daily => Frequency::TwiceDaily,
            Frequency::TwiceDaily => Frequency::Weekly,
            Frequency::Weekly => Frequency::Daily,
        }
    }

    /// Parse a frequency from user input, case-insensitive.
    pub fn parse(value: &str) -> Result<Self, WellkitError> {
        match value.to_lowercase().trim() {
            "daily" => Ok(Frequency::Daily),
            "twice daily" | "twice-daily" => Ok(Frequency::TwiceDaily),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(WellkitError::InvalidEntry {
                field: "frequency".to_string(),
                reason: format!(
                    "'{}' is not one of: daily, twice daily, weekly",
                    value
                ),
            }),
        }
    }
}

/// One medicine reminder.
///
/// `time` is a display label ("08:00 AM") — reminders never fire; there is
/// no scheduler behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub name: String,
    pub dosage: String,
    pub time: String,
    pub frequency: Frequency,
}
