//! Service-specific tests
//!
//! Each service has its own test file; shared builders live in `common`.


pub mod common {
    use shared::{GeoPoint, UserId, UserProfile};

    pub fn uid(s: &str) -> UserId {
        UserId::parse(s).expect("valid test user id")
    }

    pub fn amsterdam() -> GeoPoint {
        GeoPoint { lat: 52.3676, lon: 4.9041 }
    }

    pub fn rotterdam() -> GeoPoint {
        GeoPoint { lat: 51.9244, lon: 4.4777 }
    }

    pub fn berlin() -> GeoPoint {
        GeoPoint { lat: 52.5200, lon: 13.4050 }
    }

    pub fn profile(id: &str, gender: &str, age: u32, location: GeoPoint) -> UserProfile {
        UserProfile {
            user_id: uid(id),
            name: format!("{id} name"),
            gender: gender.to_string(),
            age,
            location,
        }
    }
}
