//! Profile form - first wizard step
//!
//! Collects the child's name, age, gender and an optional photo. Validation
//! happens on submit; every failing field gets its own inline message.

use dioxus::prelude::*;
use storybook_domain::{ChildAge, Gender, ProfileDraft, ProfileField, ProfileFormErrors, MAX_NAME_CHARS};

use crate::application::services::photo_service::content_type_for;
use crate::application::store::AppAction;
use crate::ports::outbound::UploadFile;
use crate::presentation::services::{use_app_config, use_photo_service, use_session_repository};
use crate::presentation::state::use_story_store;
use crate::routes::Route;

#[component]
pub fn ProfileForm() -> Element {
    let store = use_story_store();
    let session = use_session_repository();
    let photo_service = use_photo_service();
    let require_photo = use_app_config().require_photo;
    let navigator = use_navigator();

    let initial = use_hook(|| {
        store
            .snapshot()
            .child_profile
            .as_ref()
            .map(ProfileDraft::from_profile)
            .unwrap_or_default()
    });

    let mut name = use_signal(|| initial.name.clone());
    let mut age_choice: Signal<Option<u8>> = use_signal(|| initial.age);
    let mut gender_choice: Signal<Option<Gender>> = use_signal(|| initial.gender);
    let mut photo: Signal<Option<String>> = use_signal(|| initial.photo.clone());
    let mut errors = use_signal(ProfileFormErrors::default);
    let mut is_uploading = use_signal(|| false);
    let mut upload_error: Signal<Option<String>> = use_signal(|| None);

    let on_photo_selected = move |evt: FormEvent| {
        let service = photo_service.clone();
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            is_uploading.set(true);
            upload_error.set(None);

            let file_name = file.name();
            let content_type = file
                .content_type()
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| content_type_for(&file_name).to_string());

            match file.read_bytes().await {
                Ok(bytes) => {
                    let upload = UploadFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    };
                    match service.upload_photo(upload).await.into_result() {
                        Ok(uploaded) => photo.set(Some(uploaded.image_url)),
                        Err(message) => upload_error.set(Some(message)),
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read selected photo: {}", e);
                    upload_error.set(Some("사진 파일을 읽을 수 없어요.".to_string()));
                }
            }
            is_uploading.set(false);
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ProfileDraft {
            name: name.read().clone(),
            age: *age_choice.read(),
            gender: *gender_choice.read(),
            photo: photo.read().clone(),
        };

        match draft.validate(require_photo) {
            Ok(profile) => {
                errors.set(ProfileFormErrors::default());
                session.save_profile(&profile);
                store.dispatch(AppAction::SetChildProfile(profile));
                navigator.push(Route::ThemeRoute {});
            }
            Err(field_errors) => {
                tracing::debug!("Profile form rejected: {}", field_errors);
                errors.set(field_errors);
            }
        }
    };

    let name_len = name.read().chars().count();

    rsx! {
        form {
            class: "mx-auto flex max-w-xl flex-col gap-6 rounded-3xl bg-white p-8 shadow-lg",
            onsubmit: on_submit,

            h2 { class: "text-2xl font-bold text-amber-700", "주인공을 소개해 주세요" }

            // Name
            div {
                class: "flex flex-col gap-2",
                label { class: "font-semibold", r#for: "child-name", "이름" }
                input {
                    id: "child-name",
                    class: "rounded-xl border border-amber-300 px-4 py-2",
                    r#type: "text",
                    placeholder: "아이 이름",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                span { class: "text-right text-xs text-slate-400", "{name_len}/{MAX_NAME_CHARS}" }
                FieldError { errors, field: ProfileField::Name }
            }

            // Age
            div {
                class: "flex flex-col gap-2",
                span { class: "font-semibold", "나이" }
                div {
                    class: "flex flex-wrap gap-2",
                    for age in ChildAge::SUPPORTED {
                        button {
                            key: "{age}",
                            r#type: "button",
                            class: if *age_choice.read() == Some(age) {
                                "rounded-full bg-amber-500 px-4 py-2 text-white"
                            } else {
                                "rounded-full bg-amber-50 px-4 py-2 text-amber-800"
                            },
                            onclick: move |_| age_choice.set(Some(age)),
                            "{age}살"
                        }
                    }
                }
                FieldError { errors, field: ProfileField::Age }
            }

            // Gender
            div {
                class: "flex flex-col gap-2",
                span { class: "font-semibold", "성별" }
                div {
                    class: "flex gap-2",
                    for gender in Gender::ALL {
                        button {
                            key: "{gender.as_str()}",
                            r#type: "button",
                            class: if *gender_choice.read() == Some(gender) {
                                "rounded-full bg-amber-500 px-4 py-2 text-white"
                            } else {
                                "rounded-full bg-amber-50 px-4 py-2 text-amber-800"
                            },
                            onclick: move |_| gender_choice.set(Some(gender)),
                            "{gender.label()}"
                        }
                    }
                }
                FieldError { errors, field: ProfileField::Gender }
            }

            // Photo
            div {
                class: "flex flex-col gap-2",
                label {
                    class: "font-semibold",
                    r#for: "child-photo",
                    if require_photo { "사진" } else { "사진 (선택)" }
                }
                input {
                    id: "child-photo",
                    r#type: "file",
                    accept: "image/*",
                    disabled: *is_uploading.read(),
                    onchange: on_photo_selected,
                }
                if *is_uploading.read() {
                    span { class: "text-sm text-slate-500", "사진을 올리는 중이에요..." }
                }
                if let Some(message) = upload_error.read().as_ref() {
                    p { class: "text-sm text-rose-600", "{message}" }
                }
                if let Some(url) = photo.read().as_ref() {
                    div {
                        class: "flex items-center gap-3",
                        img {
                            class: "h-20 w-20 rounded-2xl object-cover",
                            src: "{url}",
                            alt: "아이 사진",
                        }
                        button {
                            r#type: "button",
                            class: "text-sm text-slate-500 underline",
                            onclick: move |_| photo.set(None),
                            "사진 지우기"
                        }
                    }
                }
                FieldError { errors, field: ProfileField::Photo }
            }

            button {
                r#type: "submit",
                class: "rounded-2xl bg-amber-500 py-3 text-lg font-bold text-white hover:bg-amber-600 disabled:opacity-50",
                disabled: *is_uploading.read(),
                "다음으로"
            }
        }
    }
}

#[component]
fn FieldError(errors: Signal<ProfileFormErrors>, field: ProfileField) -> Element {
    let message = errors.read().get(field).map(str::to_string);

    rsx! {
        if let Some(message) = message {
            p { class: "text-sm text-rose-600", "{message}" }
        }
    }
}
