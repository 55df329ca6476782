//! Static hospital directory.
//!
//! All data in this module is hardcoded and fictional.  There are no
//! location services — the "nearby" list is the same four facilities for
//! everyone, pre-sorted by distance label.

use wellkit_contracts::hospital::Hospital;

/// The fixed nearby-hospitals directory.
pub fn hospital_directory() -> Vec<Hospital> {
    let entry = |id: &str,
                 name: &str,
                 specialty: &str,
                 distance: &str,
                 rating: f32,
                 phone: &str,
                 emergency: bool| Hospital {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        distance: distance.to_string(),
        rating,
        phone: phone.to_string(),
        emergency,
    };

    vec![
        entry(
            "hosp-001",
            "City General Hospital",
            "Emergency & General Care",
            "0.8 km",
            4.5,
            "+1 234-567-8900",
            true,
        ),
        entry(
            "hosp-002",
            "Memorial Medical Center",
            "Cardiology & Surgery",
            "1.2 km",
            4.7,
            "+1 234-567-8901",
            false,
        ),
        entry(
            "hosp-003",
            "St. Mary's Hospital",
            "Pediatrics & Maternity",
            "2.5 km",
            4.3,
            "+1 234-567-8902",
            true,
        ),
        entry(
            "hosp-004",
            "Advanced Care Clinic",
            "Orthopedics",
            "3.1 km",
            4.6,
            "+1 234-567-8903",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::hospital_directory;

    #[test]
    fn directory_has_four_complete_entries() {
        let hospitals = hospital_directory();
        assert_eq!(hospitals.len(), 4);

        for hospital in &hospitals {
            assert!(!hospital.id.is_empty());
            assert!(!hospital.name.is_empty());
            assert!(!hospital.specialty.is_empty());
            assert!(!hospital.distance.is_empty());
            assert!(!hospital.phone.is_empty());
            assert!(hospital.rating > 0.0 && hospital.rating <= 5.0);
        }
    }

    #[test]
    fn directory_ids_are_unique() {
        let hospitals = hospital_directory();
        let unique: std::collections::HashSet<&str> =
            hospitals.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(unique.len(), hospitals.len());
    }
}
