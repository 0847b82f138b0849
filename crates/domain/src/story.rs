//! Generated story and its scenes

use crate::error::DomainError;

/// One page of a generated story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryScene {
    /// 1-based position within the story
    pub scene_number: u32,
    pub content: String,
    pub image_description: String,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub narration: String,
}

impl StoryScene {
    /// Text to show on the page; narration is used when the body is empty.
    pub fn display_text(&self) -> &str {
        if self.content.trim().is_empty() {
            &self.narration
        } else {
            &self.content
        }
    }

    pub fn has_audio(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// A complete generated story.
///
/// Invariant: scenes are ordered by `scene_number`, which starts at 1 and has
/// no gaps or duplicates. There is at least one scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteStory {
    title: String,
    moral: String,
    scenes: Vec<StoryScene>,
    character_image_url: Option<String>,
}

impl CompleteStory {
    /// Build a story, sorting scenes by number and checking contiguity.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Invariant` if there are no scenes or the scene
    /// numbers are not exactly `1..=n`.
    pub fn new(
        title: impl Into<String>,
        moral: impl Into<String>,
        mut scenes: Vec<StoryScene>,
        character_image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        if scenes.is_empty() {
            return Err(DomainError::invariant("a story needs at least one scene"));
        }

        scenes.sort_by_key(|s| s.scene_number);
        for (index, scene) in scenes.iter().enumerate() {
            let expected = index as u32 + 1;
            if scene.scene_number != expected {
                return Err(DomainError::invariant(format!(
                    "scene numbers must be contiguous from 1: expected {}, found {}",
                    expected, scene.scene_number
                )));
            }
        }

        Ok(Self {
            title: title.into(),
            moral: moral.into(),
            scenes,
            character_image_url: character_image_url.filter(|u| !u.is_empty()),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn moral(&self) -> &str {
        &self.moral
    }

    pub fn scenes(&self) -> &[StoryScene] {
        &self.scenes
    }

    pub fn scene(&self, index: usize) -> Option<&StoryScene> {
        self.scenes.get(index)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Index of the final scene (0-based)
    pub fn last_index(&self) -> usize {
        self.scenes.len().saturating_sub(1)
    }

    pub fn character_image_url(&self) -> Option<&str> {
        self.character_image_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(n: u32) -> StoryScene {
        StoryScene {
            scene_number: n,
            content: format!("장면 {}", n),
            image_description: String::new(),
            image_url: None,
            audio_url: None,
            narration: String::new(),
        }
    }

    #[test]
    fn test_scenes_are_sorted_by_number() {
        let story = CompleteStory::new("제목", "교훈", vec![scene(2), scene(1), scene(3)], None)
            .expect("valid story");
        let numbers: Vec<u32> = story.scenes().iter().map(|s| s.scene_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(story.last_index(), 2);
    }

    #[test]
    fn test_gaps_and_duplicates_are_rejected() {
        assert!(CompleteStory::new("t", "m", vec![scene(1), scene(3)], None).is_err());
        assert!(CompleteStory::new("t", "m", vec![scene(1), scene(1)], None).is_err());
        assert!(CompleteStory::new("t", "m", vec![scene(0), scene(1)], None).is_err());
    }

    #[test]
    fn test_empty_story_is_rejected() {
        let err = CompleteStory::new("t", "m", vec![], None).expect_err("no scenes");
        assert!(matches!(err, DomainError::Invariant(_)));
    }

    #[test]
    fn test_display_text_falls_back_to_narration() {
        let mut s = scene(1);
        s.content = "  ".to_string();
        s.narration = "옛날 옛적에".to_string();
        assert_eq!(s.display_text(), "옛날 옛적에");
    }

    #[test]
    fn test_empty_audio_url_means_no_audio() {
        let mut s = scene(1);
        assert!(!s.has_audio());
        s.audio_url = Some(String::new());
        assert!(!s.has_audio());
        s.audio_url = Some("https://cdn.example.com/1.mp3".to_string());
        assert!(s.has_audio());
    }
}
