//! Profile publication payload

use serde::{Deserialize, Serialize};

use crate::types::{GeoPoint, UserId, UserProfile};

/// Body of `PUT /profile`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProfileUpdate {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub location: GeoPoint,
}

impl ProfileUpdate {
    pub fn into_profile(self, user_id: UserId) -> UserProfile {
        UserProfile {
            user_id,
            name: self.name,
            gender: self.gender,
            age: self.age,
            location: self.location,
        }
    }
}
