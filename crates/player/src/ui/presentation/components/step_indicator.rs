//! Wizard progress dots

use dioxus::prelude::*;
use storybook_domain::WizardStep;

const STEPS: [(WizardStep, &str); 3] = [
    (WizardStep::Profile, "아이 정보"),
    (WizardStep::Theme, "주제 선택"),
    (WizardStep::Story, "동화 보기"),
];

fn position(step: WizardStep) -> usize {
    STEPS.iter().position(|(s, _)| *s == step).unwrap_or(0)
}

#[component]
pub fn StepIndicator(current: WizardStep) -> Element {
    let current_index = position(current);

    rsx! {
        ol {
            class: "flex items-center gap-2 text-sm",
            for (index, (step, label)) in STEPS.iter().enumerate() {
                li {
                    key: "{step}",
                    class: if index == current_index {
                        "rounded-full bg-amber-500 px-3 py-1 font-semibold text-white"
                    } else if index < current_index {
                        "rounded-full bg-amber-200 px-3 py-1 text-amber-800"
                    } else {
                        "rounded-full bg-white px-3 py-1 text-slate-400"
                    },
                    "{index + 1}. {label}"
                }
            }
        }
    }
}
