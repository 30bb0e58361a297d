//! Test users, profiles and signing key

use shared::{GeoPoint, UserId, UserProfile};

pub struct TestFixtures;

impl TestFixtures {
    pub const SIGNING_KEY: &'static str = "router-test-key";

    pub const ALICE: &'static str = "alice";
    pub const BOB: &'static str = "bob";
    pub const CAROL: &'static str = "carol";
    pub const DAVE: &'static str = "dave";

    pub fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    pub fn amsterdam() -> GeoPoint {
        GeoPoint::new(52.3676, 4.9041).unwrap()
    }

    pub fn rotterdam() -> GeoPoint {
        GeoPoint::new(51.9244, 4.4777).unwrap()
    }

    pub fn profile(id: &str, gender: &str, age: u32, location: GeoPoint) -> UserProfile {
        UserProfile {
            user_id: Self::user(id),
            name: id.to_uppercase(),
            gender: gender.to_string(),
            age,
            location,
        }
    }

    pub fn community() -> Vec<UserProfile> {
        vec![
            Self::profile(Self::ALICE, "F", 29, Self::amsterdam()),
            Self::profile(Self::BOB, "M", 31, Self::amsterdam()),
            Self::profile(Self::CAROL, "F", 26, Self::rotterdam()),
            Self::profile(Self::DAVE, "M", 45, Self::rotterdam()),
        ]
    }
}
