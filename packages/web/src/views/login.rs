//! Login page view with the phone/password form.

use dioxus::prelude::*;
use ui::LoginForm;

/// Login page component.
///
/// Redirecting away once signed in is handled by the form itself, so visiting
/// `/login` with a live session goes straight to the intended page.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-700 to-blue-500 flex flex-col justify-end",

            div {
                class: "flex flex-col items-center mb-auto pt-20",
                h1 {
                    class: "text-white font-bold text-[1.75rem]",
                    "Ful2Win"
                }
            }

            div {
                class: "bg-white rounded-t-3xl px-6 py-8 w-full max-w-md mx-auto shadow-xl",

                h2 {
                    class: "text-2xl font-semibold text-gray-700 mb-5",
                    "Hello Again!"
                }
                p {
                    class: "text-gray-500 mb-5",
                    "Login to continue"
                }

                LoginForm {}
            }
        }
    }
}
