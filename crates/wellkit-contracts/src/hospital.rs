//! Hospital directory types.

use serde::{Deserialize, Serialize};

/// One entry in the static nearby-hospitals directory.
///
/// `distance` is a pre-rendered label ("0.8 km") — there are no location
/// services; the directory is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub distance: String,
    pub rating: f32,
    pub phone: String,
    /// Whether the facility runs an emergency department.
    pub emergency: bool,
}
