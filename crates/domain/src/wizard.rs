//! Wizard progression
//!
//! The wizard is linear: profile, then theme, then story. `WizardPhase` is the
//! single derived view of how far a session has progressed; it is computed from
//! what has been collected, never stored.

use std::fmt;

/// A page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Profile,
    Theme,
    Story,
}

impl WizardStep {
    pub fn path(&self) -> &'static str {
        match self {
            WizardStep::Profile => "/profile",
            WizardStep::Theme => "/theme",
            WizardStep::Story => "/story",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    AwaitingProfile,
    AwaitingTheme,
    AwaitingStory,
    Viewing { scene: usize },
}

impl WizardPhase {
    /// Derive the phase from collected progress.
    ///
    /// Later progress only counts when every earlier step is complete, so a
    /// story without a theme still reads as `AwaitingTheme`.
    pub fn from_progress(has_profile: bool, has_theme: bool, viewing: Option<usize>) -> Self {
        match (has_profile, has_theme, viewing) {
            (false, _, _) => WizardPhase::AwaitingProfile,
            (true, false, _) => WizardPhase::AwaitingTheme,
            (true, true, None) => WizardPhase::AwaitingStory,
            (true, true, Some(scene)) => WizardPhase::Viewing { scene },
        }
    }

    /// The page this phase belongs on
    pub fn step(&self) -> WizardStep {
        match self {
            WizardPhase::AwaitingProfile => WizardStep::Profile,
            WizardPhase::AwaitingTheme => WizardStep::Theme,
            WizardPhase::AwaitingStory | WizardPhase::Viewing { .. } => WizardStep::Story,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_requires_earlier_steps() {
        assert_eq!(
            WizardPhase::from_progress(false, true, Some(2)),
            WizardPhase::AwaitingProfile
        );
        assert_eq!(
            WizardPhase::from_progress(true, false, Some(2)),
            WizardPhase::AwaitingTheme
        );
        assert_eq!(
            WizardPhase::from_progress(true, true, None),
            WizardPhase::AwaitingStory
        );
        assert_eq!(
            WizardPhase::from_progress(true, true, Some(1)),
            WizardPhase::Viewing { scene: 1 }
        );
    }

    #[test]
    fn test_phase_maps_to_its_page() {
        assert_eq!(WizardPhase::AwaitingProfile.step().path(), "/profile");
        assert_eq!(WizardPhase::AwaitingTheme.step().path(), "/theme");
        assert_eq!(WizardPhase::Viewing { scene: 0 }.step(), WizardStep::Story);
    }
}
