//! Router-backed navigation for the login workflow.
//!
//! The route guard records where an anonymous user was headed in the
//! [`NavigationIntent`] context before sending them to the login page;
//! [`RouterNavigator`] hands it back to [`gate::SessionObserver`].

use dioxus::prelude::*;
use gate::{NavigateOptions, NavigationIntent};

/// The navigation intent shared between the route guard and the login form.
pub fn use_intent() -> Signal<Option<NavigationIntent>> {
    use_context::<Signal<Option<NavigationIntent>>>()
}

#[derive(Clone, Copy)]
pub struct RouterNavigator {
    nav: Navigator,
    intent: Signal<Option<NavigationIntent>>,
}

impl RouterNavigator {
    pub fn new(nav: Navigator, intent: Signal<Option<NavigationIntent>>) -> Self {
        Self { nav, intent }
    }
}

impl gate::Navigator for RouterNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        if options.replace {
            self.nav.replace(path.to_string());
        } else {
            self.nav.push(path.to_string());
        }
    }

    fn current_intent(&self) -> Option<NavigationIntent> {
        self.intent.peek().clone()
    }
}
