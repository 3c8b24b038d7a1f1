//! Student profile singleton.

use super::Singleton;
use crate::store::StoreKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub birthday: String,
    /// Local URI of the picture, empty when unset.
    pub profile_picture: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Student".to_string(),
            bio: "Welcome to Skedyul!".to_string(),
            birthday: String::new(),
            profile_picture: String::new(),
        }
    }
}

impl Singleton for Profile {
    const KEY: StoreKey = StoreKey::Profile;
}
