use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Gender that suggestions are drawn from.
    ///
    /// Only `Male` maps to `Female`; every other value maps to `Male`.
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female | Gender::Other => Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    NeverMarried,
    Divorced,
    Widowed,
    Separated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
    Eggetarian,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(rename = "highestQualification", default)]
    pub highest_qualification: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    #[serde(default)]
    pub diet: Option<Diet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Privacy {
    #[serde(rename = "profileVisibility", default)]
    pub profile_visibility: Visibility,
}

/// Member profile, used both for the requester and for candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    pub gender: Gender,
    #[serde(default)]
    pub age: Option<u8>,
    /// Height in centimetres
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(rename = "maritalStatus", default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub privacy: Privacy,
    #[serde(rename = "isProfileVerified", default)]
    pub is_profile_verified: bool,
    #[serde(rename = "profileViews", default)]
    pub profile_views: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    pub fn is_visible(&self) -> bool {
        self.privacy.profile_visibility == Visibility::Visible
    }
}

/// Inclusive age bounds in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_age_range"))]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }

    /// Years between `age` and the nearer bound, 0 inside the range
    pub fn distance(&self, age: u8) -> u32 {
        if self.contains(age) {
            return 0;
        }
        let age = i32::from(age);
        let to_min = (age - i32::from(self.min)).unsigned_abs();
        let to_max = (age - i32::from(self.max)).unsigned_abs();
        to_min.min(to_max)
    }
}

fn validate_age_range(range: &AgeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// Inclusive height bounds in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_height_range"))]
pub struct HeightRange {
    pub min: u16,
    pub max: u16,
}

impl HeightRange {
    pub fn contains(&self, height: u16) -> bool {
        height >= self.min && height <= self.max
    }
}

fn validate_height_range(range: &HeightRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        return Err(ValidationError::new("height_range_inverted"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationPreference {
    #[serde(default)]
    pub country: Option<Vec<String>>,
    #[serde(default)]
    pub state: Option<Vec<String>>,
    #[serde(default)]
    pub city: Option<Vec<String>>,
}

impl LocationPreference {
    /// True when no tier carries a single value
    pub fn is_unconstrained(&self) -> bool {
        [&self.country, &self.state, &self.city]
            .iter()
            .all(|tier| match tier {
                Some(values) => values.is_empty(),
                None => true,
            })
    }
}

/// Partner preferences stated by the requester
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PartnerPreference {
    #[serde(rename = "ageRange", default)]
    #[validate(nested)]
    pub age_range: Option<AgeRange>,
    #[serde(rename = "heightRange", default)]
    #[validate(nested)]
    pub height_range: Option<HeightRange>,
    #[serde(rename = "maritalStatus", default)]
    pub marital_status: Vec<MaritalStatus>,
    #[serde(default)]
    pub religion: Vec<String>,
    #[serde(default)]
    pub caste: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub occupation: Vec<String>,
    #[serde(default)]
    pub location: Option<LocationPreference>,
}

/// Scored candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub profile: Profile,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Per-criterion maximum points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub age: u32,
    pub height: u32,
    pub religion: u32,
    pub caste: u32,
    pub education: u32,
    pub occupation: u32,
    pub location: u32,
    pub marital_status: u32,
}

impl ScoringWeights {
    /// Sum of all weights, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        [
            self.height,
            self.religion,
            self.caste,
            self.education,
            self.occupation,
            self.location,
            self.marital_status,
        ]
        .into_iter()
        .fold(self.age, u32::saturating_add)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age: 20,
            height: 10,
            religion: 15,
            caste: 10,
            education: 15,
            occupation: 10,
            location: 15,
            marital_status: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_total_100() {
        assert_eq!(ScoringWeights::default().total(), 100);
    }

    #[test]
    fn test_opposite_gender() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
        assert_eq!(Gender::Other.opposite(), Gender::Male);
    }

    #[test]
    fn test_age_range_distance() {
        let range = AgeRange { min: 25, max: 32 };
        assert_eq!(range.distance(28), 0);
        assert_eq!(range.distance(40), 8);
        assert_eq!(range.distance(21), 4);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let prefs = PartnerPreference {
            age_range: Some(AgeRange { min: 35, max: 25 }),
            ..Default::default()
        };
        assert!(prefs.validate().is_err());

        let prefs = PartnerPreference {
            height_range: Some(HeightRange { min: 150, max: 180 }),
            ..Default::default()
        };
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_wide_ranges_accepted() {
        let prefs = PartnerPreference {
            age_range: Some(AgeRange { min: 18, max: 120 }),
            height_range: Some(HeightRange { min: 90, max: 260 }),
            ..Default::default()
        };
        assert!(prefs.validate().is_ok());

        let prefs = PartnerPreference {
            age_range: Some(AgeRange { min: 30, max: 30 }),
            ..Default::default()
        };
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_weights_total_saturates() {
        let weights = ScoringWeights {
            age: u32::MAX,
            ..ScoringWeights::default()
        };
        assert_eq!(weights.total(), u32::MAX);
    }

    #[test]
    fn test_location_unconstrained() {
        assert!(LocationPreference::default().is_unconstrained());
        let location = LocationPreference {
            city: Some(vec![]),
            state: Some(vec!["MH".to_string()]),
            country: None,
        };
        assert!(!location.is_unconstrained());
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let json = r#"{"userId":"u1","gender":"female","maritalStatus":"never_married"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.marital_status, Some(MaritalStatus::NeverMarried));
        assert!(profile.age.is_none());
        assert!(profile.lifestyle.diet.is_none());
        assert!(profile.is_visible());
    }

    #[test]
    fn test_profile_reads_diet_from_lifestyle() {
        let json = r#"{"userId":"c","gender":"female","lifestyle":{"diet":"vegetarian"}}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.lifestyle.diet, Some(Diet::Vegetarian));

        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["lifestyle"]["diet"], "vegetarian");
    }
}
