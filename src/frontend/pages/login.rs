use crate::backend::session::LocalSessionSource;
use crate::backend::utils::config::AppConfig;
use crate::frontend::components::common::use_announcer;
use crate::frontend::services::context::{use_auth, use_session};
use crate::frontend::services::i18n::use_translation;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let auth = use_auth();
    let session = use_session();
    let i18n = use_translation();
    let announcer = use_announcer();
    let paths = use_context::<AppConfig>().auth.gate_paths();
    let mut username = use_signal(String::new);
    let mut error_key = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    // Signed-in visitors land on their role's home.
    use_effect(move || {
        if let Some(role) = session.read().role() {
            nav.replace(paths.home_for(role));
        }
    });

    let submit = move || {
        let name = username.read().trim().to_string();
        if !LocalSessionSource::is_valid_username(&name) {
            error_key.set(Some("auth.login.invalid"));
            return;
        }

        error_key.set(None);
        submitting.set(true);
        let auth = auth.clone();
        spawn(async move {
            match auth.sign_in(&name).await {
                Ok(()) => {
                    if let Some(mut announcer) = announcer {
                        announcer.announce(i18n.t("auth.signed_in"));
                    }
                }
                Err(e) => {
                    log::warn!("Sign-in failed: {e}");
                    error_key.set(Some("auth.login.failed"));
                }
            }
            submitting.set(false);
        });
    };

    let mut on_enter = submit.clone();
    let mut on_click = submit;

    rsx! {
        main {
            class: "login",
            h1 { class: "welcome-text", {i18n.t("auth.login.title")} }
            p { class: "subtitle", {i18n.t("auth.login.subtitle")} }
            label {
                r#for: "username",
                {i18n.t("auth.login.username")}
            }
            input {
                id: "username",
                class: "inline-input",
                r#type: "text",
                value: "{username}",
                maxlength: "16",
                autofocus: true,
                disabled: submitting(),
                oninput: move |e| {
                    username.set(e.value());
                    error_key.set(None);
                },
                onkeypress: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_enter();
                    }
                },
            }
            button {
                class: "login-button",
                disabled: submitting(),
                onclick: move |_| on_click(),
                {i18n.t("auth.login.submit")}
            }
            div {
                class: if error_key().is_some() {
                    "error-message error-visible"
                } else {
                    "error-message error-hidden"
                },
                role: "alert",
                {error_key().map(|key| i18n.t(key)).unwrap_or_default()}
            }
        }
    }
}
