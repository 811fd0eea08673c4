use serde::{Deserialize, Serialize};

/// External identifier of a club. Assigned by whoever seeds the catalog.
pub type ClubId = i64;

/// A bookable offering with a capacity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub subject: String,
    pub location: String,
    pub available_space: u32,
}

impl Club {
    pub fn new(
        id: ClubId,
        subject: impl Into<String>,
        location: impl Into<String>,
        available_space: u32,
    ) -> Self {
        Self {
            id,
            subject: subject.into(),
            location: location.into(),
            available_space,
        }
    }
}

/// Case-insensitive substring match over `subject` or `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubFilter {
    needle: String,
}

impl ClubFilter {
    /// Returns `None` for a blank query, which means "the whole catalog".
    pub fn from_query(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: query.to_lowercase(),
        })
    }

    pub fn matches(&self, club: &Club) -> bool {
        club.subject.to_lowercase().contains(&self.needle)
            || club.location.to_lowercase().contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_subject_or_location_ignoring_case() {
        let chess = Club::new(1, "Chess Club", "Library", 5);
        let football = Club::new(2, "Football", "Chester Park", 5);
        let art = Club::new(3, "Art", "Studio", 5);

        let filter = ClubFilter::from_query("CHE").unwrap();

        assert!(filter.matches(&chess));
        assert!(filter.matches(&football));
        assert!(!filter.matches(&art));
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_needle() {
        let clubhouse = Club::new(1, "Clubhouse", "Park", 5);
        let chess = Club::new(2, "Chess Club", "Library", 5);

        let filter = ClubFilter::from_query(" club").unwrap();

        assert!(!filter.matches(&clubhouse));
        assert!(filter.matches(&chess));
    }

    #[test]
    fn test_blank_query_has_no_filter() {
        assert_eq!(ClubFilter::from_query(""), None);
        assert_eq!(ClubFilter::from_query("   "), None);
    }

    #[test]
    fn test_club_json_uses_camel_case() {
        let json = serde_json::to_value(Club::new(1, "Chess", "Hall", 5)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "subject": "Chess", "location": "Hall", "availableSpace": 5})
        );
    }
}
