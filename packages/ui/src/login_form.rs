//! Phone + password login form.
//!
//! The component only binds DOM events to the [`gate`] workflow: a
//! [`SubmissionController`] per form instance for submits, and a
//! [`SessionObserver`] that redirects once the auth signal reports a session.

use std::rc::Rc;

use dioxus::prelude::*;
use gate::{SessionObserver, SubmissionController, SubmissionState};

use crate::auth::{use_api, use_auth, use_gate_config, SessionAuthenticator, SignalSession};
use crate::navigation::{use_intent, RouterNavigator};
use crate::toast::{use_toasts, ToastNotifier};

#[component]
pub fn LoginForm(
    #[props(default = "/forgot-password".to_string())] forgot_password_href: String,
    #[props(default = "/signup".to_string())] signup_href: String,
    #[props(default = "/terms".to_string())] terms_href: String,
    #[props(default = "/privacy".to_string())] privacy_href: String,
) -> Element {
    let auth = use_auth();
    let api = use_api();
    let config = use_gate_config();
    let toasts = use_toasts();
    let mut intent = use_intent();
    let nav = use_navigator();

    let mut form = use_signal(gate::LoginForm::default);
    let submission = use_signal(SubmissionState::default);

    let controller = use_hook(|| {
        let authenticator = SessionAuthenticator::new(api.clone(), auth);
        let notifier = ToastNotifier::new(toasts, config.toast.auto_close_ms);
        Rc::new(
            SubmissionController::new(authenticator, notifier).with_listener(move |state| {
                let mut submission = submission;
                submission.set(state.clone());
            }),
        )
    });

    let observer = use_hook(|| {
        Rc::new(SessionObserver::new(
            SignalSession(auth),
            RouterNavigator::new(nav, intent),
            config.redirect_resolver(),
        ))
    });

    // Runs on mount and whenever the auth signal changes
    use_effect(move || {
        if observer.observe().is_some() {
            intent.set(None);
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        spawn(async move {
            let input = form();
            controller.submit(&input).await;
        });
    };

    let current = form();
    let in_flight = submission().is_in_flight();

    rsx! {
        form {
            onsubmit: onsubmit,
            class: "flex flex-col w-full",

            div {
                class: "mb-4",
                label {
                    r#for: "login-phone",
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Phone Number"
                }
                input {
                    id: "login-phone",
                    r#type: "tel",
                    inputmode: "numeric",
                    autocomplete: "tel-national",
                    maxlength: "10",
                    required: true,
                    placeholder: "Enter 10-digit phone number",
                    class: "w-full px-4 py-2 border rounded-md focus:outline-none focus:ring-blue-300",
                    value: current.phone.clone(),
                    oninput: move |evt: FormEvent| form.write().set_phone(&evt.value()),
                }
            }

            div {
                class: "mb-4",
                label {
                    r#for: "login-password",
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Password"
                }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    required: true,
                    placeholder: "Enter your password",
                    class: "w-full px-4 py-2 border rounded-md focus:outline-none focus:ring-blue-300",
                    value: current.password.clone(),
                    oninput: move |evt: FormEvent| form.write().set_password(&evt.value()),
                }
            }

            div {
                class: "text-right text-sm mb-4",
                a {
                    class: "text-blue-600 hover:underline",
                    href: "{forgot_password_href}",
                    "Forgot Password?"
                }
            }

            div {
                class: "flex items-center mb-4 text-sm",
                input {
                    id: "login-consent",
                    r#type: "checkbox",
                    class: "mr-2",
                    checked: current.consent,
                    onchange: move |evt: FormEvent| form.write().set_consent(evt.checked()),
                }
                label {
                    r#for: "login-consent",
                    class: "text-gray-700",
                    "I agree to the "
                    a { class: "text-blue-600 hover:underline", href: "{terms_href}", "Terms" }
                    " and "
                    a { class: "text-blue-600 hover:underline", href: "{privacy_href}", "Privacy Policy" }
                }
            }

            button {
                r#type: "submit",
                disabled: in_flight,
                class: if in_flight { "w-full py-3 rounded-lg text-white bg-blue-400" } else { "w-full py-3 rounded-lg text-white bg-blue-600 hover:bg-blue-700" },
                if in_flight { "Logging in..." } else { "Login" }
            }
        }

        p {
            class: "text-center text-sm mt-4 text-gray-500",
            "Don’t have an account? "
            a {
                class: "text-blue-600 hover:underline font-medium",
                href: "{signup_href}",
                "Sign Up"
            }
        }
    }
}
