//! Post-login destination and the navigation capability.

/// Path the user was trying to reach before being sent to the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub path: String,
}

impl NavigationIntent {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Capability over the app router.
pub trait Navigator {
    fn navigate(&self, path: &str, options: NavigateOptions);

    /// Where the user was headed before being redirected to login, if anywhere.
    fn current_intent(&self) -> Option<NavigationIntent>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        (**self).navigate(path, options)
    }

    fn current_intent(&self) -> Option<NavigationIntent> {
        (**self).current_intent()
    }
}

impl<N: Navigator + ?Sized> Navigator for std::rc::Rc<N> {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        (**self).navigate(path, options)
    }

    fn current_intent(&self) -> Option<NavigationIntent> {
        (**self).current_intent()
    }
}

/// Picks the post-login destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResolver {
    default_path: String,
}

impl Default for RedirectResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RedirectResolver {
    pub fn new(default_path: impl Into<String>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }

    /// The intent's path if there is one, else the default path.
    pub fn resolve(&self, intent: Option<&NavigationIntent>) -> String {
        match intent {
            Some(intent) if !intent.path.is_empty() => intent.path.clone(),
            _ => self.default_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_intent() {
        let resolver = RedirectResolver::default();
        let intent = NavigationIntent::new("/dashboard");
        assert_eq!(resolver.resolve(Some(&intent)), "/dashboard");
    }

    #[test]
    fn test_resolve_defaults_to_root() {
        let resolver = RedirectResolver::default();
        assert_eq!(resolver.resolve(None), "/");
        assert_eq!(resolver.resolve(Some(&NavigationIntent::new(""))), "/");
    }

    #[test]
    fn test_resolve_custom_default() {
        let resolver = RedirectResolver::new("/home");
        assert_eq!(resolver.resolve(None), "/home");
        assert_eq!(
            resolver.resolve(Some(&NavigationIntent::new("/games/42?tab=rules"))),
            "/games/42?tab=rules"
        );
    }
}
