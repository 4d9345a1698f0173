//! Signed-in user record.

use serde::{Deserialize, Serialize};

/// Profile fields supplied on login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Partial profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStore {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_logged_in: bool,
}

impl UserStore {
    pub fn login(&mut self, profile: UserProfile) {
        self.id = Some(profile.id);
        self.name = Some(profile.name);
        self.email = Some(profile.email);
        self.is_logged_in = true;
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserProfile {
        UserProfile {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn test_login_logout() {
        let mut store = UserStore::default();
        store.login(ada());
        assert!(store.is_logged_in);
        assert_eq!(store.id, Some(1));

        store.logout();
        assert_eq!(store, UserStore::default());
    }

    #[test]
    fn test_update_profile_is_partial() {
        let mut store = UserStore::default();
        store.login(ada());
        store.update_profile(ProfilePatch {
            name: Some("Grace".into()),
            email: None,
        });
        assert_eq!(store.name.as_deref(), Some("Grace"));
        assert_eq!(store.email.as_deref(), Some("ada@example.com"));
        assert!(store.is_logged_in);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(UserStore::default()).unwrap();
        assert_eq!(json["isLoggedIn"], false);
        assert!(json["id"].is_null());
    }
}
