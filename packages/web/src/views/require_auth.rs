//! Route guard for pages that need a session.

use dioxus::prelude::*;
use gate::NavigationIntent;
use ui::{use_auth, use_gate_config, use_intent};

use crate::Route;

/// Layout that sends anonymous users to the login page, remembering where
/// they were headed so the login form can bring them back.
#[component]
pub fn RequireAuth() -> Element {
    let auth = use_auth();
    let mut intent = use_intent();
    let nav = use_navigator();
    let login_path = use_gate_config().redirect.login_path;
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), move |(route,)| {
        let state = auth();
        if state.loading || state.user.is_some() {
            return;
        }
        tracing::debug!("{} requires a session, redirecting to {}", route, login_path);
        intent.set(Some(NavigationIntent::new(route.to_string())));
        nav.replace(login_path.clone());
    }));

    let state = auth();
    if state.loading || state.user.is_none() {
        return rsx! {
            div {
                class: "flex items-center justify-center min-h-screen text-gray-500",
                "Loading..."
            }
        };
    }

    rsx! {
        Outlet::<Route> {}
    }
}
