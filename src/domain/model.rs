use crate::core::tables::{EarthlyBranch, Element, HeavenlyStem};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compass direction the house faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseDirection {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

pub const ALL_HOUSE_DIRECTIONS: [HouseDirection; 8] = [
    HouseDirection::North,
    HouseDirection::South,
    HouseDirection::East,
    HouseDirection::West,
    HouseDirection::Northeast,
    HouseDirection::Northwest,
    HouseDirection::Southeast,
    HouseDirection::Southwest,
];

impl HouseDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }
}

impl FromStr for HouseDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_HOUSE_DIRECTIONS
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| format!("unknown house direction '{}'", s))
    }
}

/// Raw, untrusted form submission. Every field is optional so that missing
/// values surface as a validation error instead of a body rejection.
/// A client-supplied `age` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculateSubmission {
    pub full_name: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub house_direction: Option<String>,
    pub profession: Option<String>,
}

/// A validated request. `age` is always derived from `birth_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyNumberRequest {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub house_direction: Option<HouseDirection>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profession: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementReading {
    pub element: Element,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemReading {
    pub stem: HeavenlyStem,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchReading {
    pub branch: EarthlyBranch,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyNumberResult {
    pub id: String,
    pub request: LuckyNumberRequest,
    pub lucky_numbers: Vec<u8>,
    pub lucky_days: Vec<String>,
    pub lucky_hours: Vec<String>,
    pub lucky_colors: Vec<String>,
    pub feng_shui_advice: String,
    pub five_elements: ElementReading,
    pub heavenly_stems: StemReading,
    pub earthly_branches: BranchReading,
    pub created_at: DateTime<Utc>,
}

impl LuckyNumberResult {
    /// Text offered for copy/share: "Số may mắn của tôi: 1, 3, 5".
    pub fn share_text(&self) -> String {
        let numbers: Vec<String> = self.lucky_numbers.iter().map(u8::to_string).collect();
        format!("Số may mắn của tôi: {}", numbers.join(", "))
    }
}

/// JSON envelope returned by every API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_ignores_client_age_and_unknown_fields() {
        let body = r#"{"fullName":"An","birthDate":"1990-05-15","gender":"male","age":999,"theme":"dark"}"#;
        let submission: CalculateSubmission = serde_json::from_str(body).unwrap();
        assert_eq!(submission.full_name.as_deref(), Some("An"));
        assert_eq!(submission.gender.as_deref(), Some("male"));
        assert!(submission.house_direction.is_none());
    }

    #[test]
    fn test_empty_body_object_is_accepted_as_submission() {
        let submission: CalculateSubmission = serde_json::from_str("{}").unwrap();
        assert!(submission.full_name.is_none());
        assert!(submission.birth_date.is_none());
    }

    #[test]
    fn test_house_direction_parse() {
        assert_eq!("Northeast".parse::<HouseDirection>(), Ok(HouseDirection::Northeast));
        assert_eq!(HouseDirection::Southwest.as_str(), "southwest");
        assert!("up".parse::<HouseDirection>().is_err());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::failure("Thiếu thông tin bắt buộc")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Thiếu thông tin bắt buộc"})
        );
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = LuckyNumberRequest {
            full_name: "Nguyen Van An".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            gender: Gender::Male,
            age: 36,
            house_direction: Some(HouseDirection::East),
            profession: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Nguyen Van An");
        assert_eq!(json["birthDate"], "1990-05-15");
        assert_eq!(json["houseDirection"], "east");
        assert!(json.get("profession").is_none());
    }
}
