use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 gap-4",
            h1 { class: "text-2xl font-semibold text-gray-800", "Welcome, {name}" }
            Link {
                class: "text-blue-600 hover:underline",
                to: Route::Dashboard {},
                "Go to dashboard"
            }
            LogoutButton { class: "px-4 py-2 rounded bg-gray-100 text-gray-700" }
        }
    }
}
