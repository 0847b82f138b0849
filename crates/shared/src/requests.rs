//! Request bodies sent to the backend

use serde::{Deserialize, Serialize};
use storybook_domain::{ChildProfile, Gender, ThemeValue};

/// Child profile as the backend expects it (photo is always present, possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfileData {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(default)]
    pub photo: String,
}

impl From<&ChildProfile> for ChildProfileData {
    fn from(profile: &ChildProfile) -> Self {
        Self {
            name: profile.name.to_string(),
            age: profile.age.value(),
            gender: profile.gender,
            photo: profile.photo_or_empty().to_string(),
        }
    }
}

/// Body of `POST /generate_complete_story`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub child_profile: ChildProfileData,
    pub theme: ThemeValue,
}

impl StoryRequest {
    pub fn new(profile: &ChildProfile, theme: ThemeValue) -> Self {
        Self {
            child_profile: profile.into(),
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_domain::ProfileDraft;

    #[test]
    fn test_story_request_wire_shape() {
        let profile = ProfileDraft {
            name: "지우".to_string(),
            age: Some(5),
            gender: Some(Gender::Boy),
            photo: None,
        }
        .validate(false)
        .expect("valid profile");

        let request = StoryRequest::new(&profile, ThemeValue::FriendshipSkills);
        let json = serde_json::to_value(&request).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "child_profile": { "name": "지우", "age": 5, "gender": "boy", "photo": "" },
                "theme": "friendship_skills"
            })
        );
    }
}
