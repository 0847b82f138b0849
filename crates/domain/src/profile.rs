//! Child profile - the first wizard step
//!
//! These newtypes ensure a profile is valid by construction:
//! - Names are trimmed, non-empty and at most 10 characters (not bytes)
//! - Ages are limited to the supported reading range
//! - Gender is a closed set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Maximum length of a child's name, counted in characters
pub const MAX_NAME_CHARS: usize = 10;

/// Youngest supported age
const MIN_AGE: u8 = 3;

/// Oldest supported age
const MAX_AGE: u8 = 7;

// ============================================================================
// ChildName
// ============================================================================

/// A validated child name (non-empty, <=10 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChildName(String);

impl ChildName {
    /// Create a new validated child name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 10 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Child name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::validation(format!(
                "Child name cannot exceed {} characters",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChildName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ChildName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ChildName> for String {
    fn from(name: ChildName) -> String {
        name.0
    }
}

// ============================================================================
// ChildAge
// ============================================================================

/// A supported child age (3 to 7 inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ChildAge(u8);

impl ChildAge {
    /// Every age offered by the profile form, youngest first.
    pub const SUPPORTED: [u8; 5] = [3, 4, 5, 6, 7];

    pub fn new(age: u8) -> Result<Self, DomainError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(DomainError::validation(format!(
                "Age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }
        Ok(Self(age))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ChildAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ChildAge {
    type Error = DomainError;

    fn try_from(age: u8) -> Result<Self, Self::Error> {
        Self::new(age)
    }
}

impl From<ChildAge> for u8 {
    fn from(age: ChildAge) -> u8 {
        age.0
    }
}

// ============================================================================
// Gender
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Boy, Gender::Girl];

    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }

    /// Label shown in the profile form
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Boy => "남자아이",
            Gender::Girl => "여자아이",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boy" => Ok(Gender::Boy),
            "girl" => Ok(Gender::Girl),
            other => Err(DomainError::parse(format!("Unknown gender: {}", other))),
        }
    }
}

// ============================================================================
// ChildProfile
// ============================================================================

/// The child the story is personalized for.
///
/// Immutable once submitted; a new profile replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub name: ChildName,
    pub age: ChildAge,
    pub gender: Gender,
    /// Data URL or remote URL of the child's photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl ChildProfile {
    pub fn new(name: ChildName, age: ChildAge, gender: Gender, photo: Option<String>) -> Self {
        Self {
            name,
            age,
            gender,
            photo: photo.filter(|p| !p.trim().is_empty()),
        }
    }

    /// Photo reference as sent to the backend (empty when absent)
    pub fn photo_or_empty(&self) -> &str {
        self.photo.as_deref().unwrap_or("")
    }
}

// ============================================================================
// Profile form
// ============================================================================

/// Fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Age,
    Gender,
    Photo,
}

/// Per-field validation messages for the profile form.
///
/// Messages are user-facing and shown inline next to the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFormErrors {
    errors: BTreeMap<ProfileField, String>,
}

impl ProfileFormErrors {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: ProfileField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for ProfileFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.errors.keys().map(|k| format!("{:?}", k)).collect();
        write!(f, "invalid profile fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ProfileFormErrors {}

/// Raw, unvalidated profile form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub photo: Option<String>,
}

impl ProfileDraft {
    /// Pre-fill the form from an already submitted profile
    pub fn from_profile(profile: &ChildProfile) -> Self {
        Self {
            name: profile.name.to_string(),
            age: Some(profile.age.value()),
            gender: Some(profile.gender),
            photo: profile.photo.clone(),
        }
    }

    /// Validate every field, collecting one message per failing field.
    pub fn validate(&self, require_photo: bool) -> Result<ChildProfile, ProfileFormErrors> {
        let mut errors = ProfileFormErrors::default();

        let name = match ChildName::new(self.name.as_str()) {
            Ok(name) => Some(name),
            Err(_) if self.name.trim().is_empty() => {
                errors.insert(ProfileField::Name, "이름을 입력해 주세요.");
                None
            }
            Err(_) => {
                errors.insert(ProfileField::Name, "이름은 10자 이하로 입력해 주세요.");
                None
            }
        };

        let age = match self.age.map(ChildAge::new) {
            Some(Ok(age)) => Some(age),
            Some(Err(_)) | None => {
                errors.insert(ProfileField::Age, "나이를 선택해 주세요.");
                None
            }
        };

        if self.gender.is_none() {
            errors.insert(ProfileField::Gender, "성별을 선택해 주세요.");
        }

        let photo = self.photo.clone().filter(|p| !p.trim().is_empty());
        if require_photo && photo.is_none() {
            errors.insert(ProfileField::Photo, "사진을 올려 주세요.");
        }

        match (name, age, self.gender) {
            (Some(name), Some(age), Some(gender)) if errors.is_empty() => {
                Ok(ChildProfile::new(name, age, gender, photo))
            }
            _ => Err(errors),
        }
    }
}
