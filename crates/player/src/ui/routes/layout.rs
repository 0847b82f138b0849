//! Shared frame around every wizard page

use dioxus::prelude::*;
use storybook_domain::WizardStep;

use crate::presentation::components::{AppErrorBoundary, StepIndicator};
use crate::routes::Route;

#[component]
pub fn WizardLayout() -> Element {
    let route = use_route::<Route>();
    let step = match route {
        Route::ProfileRoute {} => Some(WizardStep::Profile),
        Route::ThemeRoute {} => Some(WizardStep::Theme),
        Route::StoryRoute {} => Some(WizardStep::Story),
        Route::NotFoundRoute { .. } => None,
    };

    rsx! {
        div {
            class: "mx-auto flex min-h-screen max-w-3xl flex-col px-4 py-6",
            header {
                class: "mb-6 flex flex-col items-center gap-3",
                h1 {
                    class: "text-3xl font-bold text-amber-600",
                    "📚 나만의 동화책"
                }
                if let Some(step) = step {
                    StepIndicator { current: step }
                }
            }
            main {
                class: "flex-1",
                AppErrorBoundary {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
