use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Protected page; reaching it while signed out exercises the login redirect.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let phone = auth()
        .user
        .map(|user| user.phone_number)
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 gap-4",
            h1 { class: "text-2xl font-semibold text-gray-800", "Dashboard" }
            p { class: "text-gray-500", "Signed in as {phone}" }
            Link {
                class: "text-blue-600 hover:underline",
                to: Route::Home {},
                "Home"
            }
            LogoutButton { class: "px-4 py-2 rounded bg-gray-100 text-gray-700" }
        }
    }
}
