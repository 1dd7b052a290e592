use dioxus::prelude::*;

use gate::GateConfig;
use ui::AuthProvider;
use views::{Dashboard, Home, Login, RequireAuth};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RequireAuth)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

const CONFIG_TOML: &str = include_str!("../gate.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the bundled `gate.toml`, resolving an empty base URL to the page origin.
fn load_config() -> GateConfig {
    let mut config = match GateConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", GateConfig::filename(), e);
            GateConfig::default()
        }
    };

    if config.api.base_url.is_empty() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                config.api.base_url = origin;
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            config.api.base_url = gate::config::ApiConfig::default().base_url;
        }
    }
    config
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        AuthProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = GateConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.redirect.login_path, "/login");
        assert_eq!(config.redirect.default_path, "/");
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::Login {}.to_string(), "/login");
    }
}
