//! Test users, profiles and locations

use shared::{GeoPoint, Preference, SwipeDecision, UserId, UserProfile};

pub struct TestFixtures;

impl TestFixtures {
    pub const ALICE: &'static str = "alice";
    pub const BOB: &'static str = "bob";
    pub const CAROL: &'static str = "carol";
    pub const DAVE: &'static str = "dave";
    pub const ERIN: &'static str = "erin";

    pub fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    pub fn alice() -> UserId {
        Self::user(Self::ALICE)
    }

    pub fn bob() -> UserId {
        Self::user(Self::BOB)
    }

    pub fn carol() -> UserId {
        Self::user(Self::CAROL)
    }

    pub fn amsterdam() -> GeoPoint {
        GeoPoint::new(52.3676, 4.9041).unwrap()
    }

    pub fn utrecht() -> GeoPoint {
        GeoPoint::new(52.0907, 5.1214).unwrap()
    }

    pub fn paris() -> GeoPoint {
        GeoPoint::new(48.8566, 2.3522).unwrap()
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

    /// alice (F, 29) and her neighbourhood
    pub fn community() -> Vec<UserProfile> {
        vec![
            Self::profile(Self::ALICE, "F", 29, Self::amsterdam()),
            Self::profile(Self::BOB, "M", 31, Self::amsterdam()),
            Self::profile(Self::CAROL, "F", 26, Self::utrecht()),
            Self::profile(Self::DAVE, "M", 45, Self::utrecht()),
            Self::profile(Self::ERIN, "F", 33, Self::paris()),
        ]
    }

    pub fn like(from: &str, to: &str) -> SwipeDecision {
        SwipeDecision::unmatched(Self::user(from), Self::user(to), Preference::Like)
    }

    pub fn dislike(from: &str, to: &str) -> SwipeDecision {
        SwipeDecision::unmatched(Self::user(from), Self::user(to), Preference::Dislike)
    }
}
