//! Route guard
//!
//! A guarded page declares which earlier steps it depends on. When one is
//! missing the guard replaces the current history entry with that step.

use dioxus::prelude::*;
use storybook_domain::WizardStep;

use crate::application::store::AppState;
use crate::presentation::state::use_story_store;
use crate::routes::Route;

/// Prerequisites of a guarded page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardRequirements {
    pub require_profile: bool,
    pub require_theme: bool,
}

/// Where a guarded page must send the user instead, if anywhere.
///
/// The theme check runs first: a theme-gated page with neither profile nor
/// theme goes to `/theme`, whose own guard then forwards to `/profile`.
pub fn guard_redirect(requirements: GuardRequirements, state: &AppState) -> Option<WizardStep> {
    if requirements.require_theme && !state.can_proceed_to_story() {
        return Some(WizardStep::Theme);
    }
    if requirements.require_profile && !state.can_proceed_to_theme() {
        return Some(WizardStep::Profile);
    }
    None
}

#[component]
pub fn RouteGuard(
    #[props(default)] require_profile: bool,
    #[props(default)] require_theme: bool,
    children: Element,
) -> Element {
    let store = use_story_store();
    let navigator = use_navigator();
    let requirements = GuardRequirements {
        require_profile,
        require_theme,
    };

    use_effect(move || {
        if let Some(step) = store.read_with(|state| guard_redirect(requirements, state)) {
            tracing::info!("Guard redirecting to {}", step);
            navigator.replace(Route::from(step));
        }
    });

    if store.read_with(|state| guard_redirect(requirements, state)).is_some() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
