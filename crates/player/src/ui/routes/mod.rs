//! Routing for the wizard
//!
//! `/` forwards to the first step. Later steps sit behind `RouteGuard`, which
//! sends the user back to the earliest step whose input is missing.

use dioxus::prelude::*;
use storybook_domain::WizardStep;

mod guard;
mod layout;
mod profile;
mod story;
mod theme;

pub use guard::{guard_redirect, GuardRequirements, RouteGuard};
pub use layout::WizardLayout;
pub use profile::ProfileRoute;
pub use story::StoryRoute;
pub use theme::ThemeRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ProfileRoute {})]
    #[layout(WizardLayout)]
        #[route("/profile")]
        ProfileRoute {},
        #[route("/theme")]
        ThemeRoute {},
        #[route("/story")]
        StoryRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

impl From<WizardStep> for Route {
    fn from(step: WizardStep) -> Self {
        match step {
            WizardStep::Profile => Route::ProfileRoute {},
            WizardStep::Theme => Route::ThemeRoute {},
            WizardStep::Story => Route::StoryRoute {},
        }
    }
}

/// Unknown paths go back to the start of the wizard
#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!("Unknown route /{}, redirecting to profile", segments.join("/"));
        navigator.replace(Route::ProfileRoute {});
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_steps_map_to_their_paths() {
        for step in [WizardStep::Profile, WizardStep::Theme, WizardStep::Story] {
            assert_eq!(Route::from(step).to_string(), step.path());
        }
    }
}
