//! Wire-level record types for the backend REST surface
//!
//! Records are validated at the fetch boundary: required fields must be
//! present and category strings must name a known category, while the
//! optional profile fields tolerate being absent or null.

use serde::{Deserialize, Serialize};

/// Creator category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Startup fundraising campaigns
    Startup,
    /// Charitable causes
    Charity,
    /// Sponsorship drives
    Sponsorship,
    /// Medical and healthcare campaigns
    Healthcare,
}

impl Category {
    /// All known categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Startup,
        Category::Charity,
        Category::Sponsorship,
        Category::Healthcare,
    ];
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "startup" => Ok(Category::Startup),
            "charity" => Ok(Category::Charity),
            "sponsorship" => Ok(Category::Sponsorship),
            "healthcare" => Ok(Category::Healthcare),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Startup => write!(f, "Startup"),
            Category::Charity => write!(f, "Charity"),
            Category::Sponsorship => write!(f, "Sponsorship"),
            Category::Healthcare => write!(f, "Healthcare"),
        }
    }
}

/// Creator record as returned by `GET /admin/allcreators`
///
/// Immutable once fetched; the admin surface only ever deletes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRecord {
    /// Backend-assigned unique identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Campaign category
    pub category: Category,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Login username
    #[serde(default)]
    pub username: Option<String>,
    /// Mobile number
    #[serde(default, rename = "mobileno")]
    pub mobile: Option<String>,
    /// Location
    #[serde(default)]
    pub location: Option<String>,
}

/// Payload for `POST /admin/addcreator`
///
/// Field names follow the backend's form contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCreator {
    pub name: String,
    pub category: Category,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "mobileno")]
    pub mobile: String,
    pub location: String,
}

/// Read-only campaign reference nested in a donation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign title
    #[serde(default)]
    pub title: Option<String>,
    /// Campaign category label
    #[serde(default)]
    pub category: Option<String>,
}

/// Donation record as returned by `GET /donation/by-donor/{id}`
///
/// Read-only from this surface; never mutated or deleted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    /// Backend-assigned unique identifier
    pub id: u64,
    /// Donated amount
    pub amount: f64,
    /// Associated campaign, if the backend still has one
    #[serde(default)]
    pub campaign: Option<Campaign>,
    /// Donation timestamp, as the backend formatted it
    #[serde(default, rename = "donationDate")]
    pub donated_at: Option<String>,
    /// Optional free-text message left by the donor
    #[serde(default)]
    pub message: Option<String>,
}

impl DonationRecord {
    /// Campaign title with a safe fallback
    pub fn campaign_title(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.title.as_deref())
            .unwrap_or("Campaign")
    }

    /// Campaign category with a safe fallback
    pub fn campaign_category(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.category.as_deref())
            .unwrap_or("General")
    }

    /// Donation timestamp formatted for display
    ///
    /// Accepts RFC-3339 and the bare `YYYY-MM-DDTHH:MM:SS` form the backend
    /// usually sends; anything else falls back to a trimmed raw string.
    pub fn display_datetime(&self) -> String {
        let raw = match self.donated_at.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return "—".to_string(),
        };

        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }

        raw.replace('T', " ").chars().take(16).collect()
    }

    /// Donor message with a safe fallback
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("—")
    }
}

/// Locally persisted donor identity
///
/// Written by the login flow, read at screen load to scope which donations
/// to fetch. Never mutated by this surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorIdentity {
    /// Backend-assigned donor identifier
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("startup".parse::<Category>().unwrap(), Category::Startup);
        assert_eq!("CHARITY".parse::<Category>().unwrap(), Category::Charity);
        assert_eq!(
            "Sponsorship".parse::<Category>().unwrap(),
            Category::Sponsorship
        );
        assert_eq!(
            "healthcare".parse::<Category>().unwrap(),
            Category::Healthcare
        );
        assert!("crypto".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                category.to_string().parse::<Category>().unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_creator_record_wire_format() {
        let json = r#"{
            "id": 7,
            "name": "Asha Rao",
            "category": "Charity",
            "email": "asha@example.com",
            "username": "asha",
            "mobileno": "9876543210",
            "location": "Chennai"
        }"#;
        let creator: CreatorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(creator.id, 7);
        assert_eq!(creator.category, Category::Charity);
        assert_eq!(creator.mobile.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_creator_record_optional_fields_absent() {
        let json = r#"{"id": 1, "name": "Min", "category": "Startup"}"#;
        let creator: CreatorRecord = serde_json::from_str(json).unwrap();
        assert!(creator.email.is_none());
        assert!(creator.username.is_none());
        assert!(creator.mobile.is_none());
        assert!(creator.location.is_none());
    }

    #[test]
    fn test_creator_record_rejects_unknown_category() {
        let json = r#"{"id": 1, "name": "Min", "category": "Crypto"}"#;
        assert!(serde_json::from_str::<CreatorRecord>(json).is_err());
    }

    #[test]
    fn test_new_creator_form_field_names() {
        let creator = NewCreator {
            name: "Asha Rao".to_string(),
            category: Category::Charity,
            email: "asha@example.com".to_string(),
            username: "asha".to_string(),
            password: "secret".to_string(),
            mobile: "9876543210".to_string(),
            location: "Chennai".to_string(),
        };
        let json = serde_json::to_value(&creator).unwrap();
        // The backend's form contract names the field "mobileno"
        assert_eq!(json["mobileno"], "9876543210");
        assert_eq!(json["category"], "Charity");
    }

    #[test]
    fn test_donation_record_wire_format() {
        let json = r#"{
            "id": 42,
            "amount": 1500.0,
            "campaign": {"title": "Clean Water", "category": "Charity"},
            "donationDate": "2026-02-14T09:30:00",
            "message": "Keep going!"
        }"#;
        let donation: DonationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(donation.campaign_title(), "Clean Water");
        assert_eq!(donation.campaign_category(), "Charity");
        assert_eq!(donation.display_datetime(), "2026-02-14 09:30");
        assert_eq!(donation.display_message(), "Keep going!");
    }

    #[test]
    fn test_donation_record_defaults() {
        let json = r#"{"id": 1, "amount": 200.0}"#;
        let donation: DonationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(donation.campaign_title(), "Campaign");
        assert_eq!(donation.campaign_category(), "General");
        assert_eq!(donation.display_datetime(), "—");
        assert_eq!(donation.display_message(), "—");
    }

    #[test]
    fn test_display_datetime_fallback() {
        let donation = DonationRecord {
            id: 1,
            amount: 10.0,
            campaign: None,
            donated_at: Some("2026-02-14T09:30:00+05:30 extra".to_string()),
            message: None,
        };
        // Unparseable input falls back to a trimmed raw string
        assert_eq!(donation.display_datetime(), "2026-02-14 09:30");
    }

    #[test]
    fn test_donor_identity_parse() {
        let json = r#"{"id": 3, "name": "Ravi", "email": "ravi@example.com"}"#;
        let donor: DonorIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(donor.id, 3);
        assert_eq!(donor.name.as_deref(), Some("Ravi"));

        let minimal: DonorIdentity = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert!(minimal.name.is_none());
    }
}
