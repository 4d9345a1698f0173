//! Client state stores.
//!
//! Independent single-owner records. The server builds a fresh
//! [`InitialState`] per request and serializes it into the page so the
//! client stores start from the same values the markup was rendered with.

pub mod counter;
pub mod device;
pub mod theme;
pub mod user;

use serde::Serialize;

pub use counter::CounterStore;
pub use device::{detect_device, DeviceInfo, DeviceType};
pub use theme::{Theme, ThemeStore};
pub use user::{ProfilePatch, UserProfile, UserStore};

/// Name of the cookie the client mirrors its theme choice into.
pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Serialize)]
pub struct InitialState {
    pub user: UserStore,
    pub theme: ThemeStore,
    pub counter: CounterStore,
    pub device: DeviceInfo,
}

impl InitialState {
    /// Snapshot for one request.
    ///
    /// The system color scheme is unknown on the server, so `Auto` starts light.
    pub fn for_request(user_agent: &str, theme: Option<Theme>) -> Self {
        let mut theme_store = ThemeStore::default();
        if let Some(theme) = theme {
            theme_store.set_theme(theme, false);
        }

        Self {
            user: UserStore::default(),
            theme: theme_store,
            counter: CounterStore::default(),
            device: detect_device(user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cookie_seeds_store() {
        let state = InitialState::for_request("", Some(Theme::Dark));
        assert!(state.theme.is_dark);

        let state = InitialState::for_request("", None);
        assert_eq!(state.theme.theme, Theme::Auto);
        assert!(!state.theme.is_dark);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(InitialState::for_request("iPhone", None)).unwrap();
        assert_eq!(json["counter"]["count"], 0);
        assert_eq!(json["theme"]["theme"], "auto");
        assert_eq!(json["device"]["deviceType"], "mobile");
        assert_eq!(json["user"]["isLoggedIn"], false);
    }
}
