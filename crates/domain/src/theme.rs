//! Story themes - the lesson a story is built around

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Catalog key of a theme. The set is closed; the backend catalog and the
/// local fallback catalog use the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeValue {
    HealthyEating,
    FriendshipSkills,
    SafetyHabits,
    FinancialLiteracy,
    EmotionalIntelligence,
}

impl ThemeValue {
    pub const ALL: [ThemeValue; 5] = [
        ThemeValue::HealthyEating,
        ThemeValue::FriendshipSkills,
        ThemeValue::SafetyHabits,
        ThemeValue::FinancialLiteracy,
        ThemeValue::EmotionalIntelligence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeValue::HealthyEating => "healthy_eating",
            ThemeValue::FriendshipSkills => "friendship_skills",
            ThemeValue::SafetyHabits => "safety_habits",
            ThemeValue::FinancialLiteracy => "financial_literacy",
            ThemeValue::EmotionalIntelligence => "emotional_intelligence",
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeValue::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown theme: {}", s)))
    }
}

/// A selectable theme as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub value: ThemeValue,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
}

impl Theme {
    fn builtin(value: ThemeValue, name: &str, description: &str, emoji: &str) -> Self {
        Self {
            value,
            name: name.to_string(),
            description: description.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// Hardcoded catalog used when the remote catalog cannot be fetched.
pub fn fallback_catalog() -> Vec<Theme> {
    vec![
        Theme::builtin(
            ThemeValue::HealthyEating,
            "건강한 식습관",
            "골고루 먹고 튼튼하게 자라는 이야기",
            "🥦",
        ),
        Theme::builtin(
            ThemeValue::FriendshipSkills,
            "친구 사귀기",
            "함께 나누고 배려하며 친구가 되는 이야기",
            "🤝",
        ),
        Theme::builtin(
            ThemeValue::SafetyHabits,
            "안전 습관",
            "길을 건너고 낯선 사람을 만날 때 지켜야 할 약속",
            "🚦",
        ),
        Theme::builtin(
            ThemeValue::FinancialLiteracy,
            "경제 교육",
            "용돈을 모으고 아껴 쓰는 방법을 배우는 이야기",
            "🐷",
        ),
        Theme::builtin(
            ThemeValue::EmotionalIntelligence,
            "감정 표현",
            "내 마음을 알고 친구의 마음을 이해하는 이야기",
            "💗",
        ),
    ]
}
