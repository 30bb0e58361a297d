//! Core domain types shared by the matching service crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult};

/// Mean earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Identifier of a user account
///
/// Never empty and never padded with whitespace. Construct through
/// [`UserId::parse`]; deserialization goes through the same check.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: impl Into<String>) -> SharedResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SharedError::InvalidUserId {
                reason: "user id must not be empty".to_string(),
            });
        }
        if raw.trim().len() != raw.len() {
            return Err(SharedError::InvalidUserId {
                reason: format!("user id '{raw}' has surrounding whitespace"),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier shared by both sides of a confirmed mutual like
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Mint a fresh match id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidMatchId { input: s.to_string() })
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unordered pair of users, the key a match is recorded under
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey {
    low: UserId,
    high: UserId,
}

impl PairKey {
    pub fn new(a: &UserId, b: &UserId) -> Self {
        if a <= b {
            Self { low: a.clone(), high: b.clone() }
        } else {
            Self { low: b.clone(), high: a.clone() }
        }
    }

    pub fn contains(&self, user: &UserId) -> bool {
        &self.low == user || &self.high == user
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}

/// Like or dislike. Travels as a plain boolean on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Preference {
    Like,
    Dislike,
}

impl Preference {
    pub fn is_like(self) -> bool {
        matches!(self, Preference::Like)
    }
}

impl From<bool> for Preference {
    fn from(liked: bool) -> Self {
        if liked { Preference::Like } else { Preference::Dislike }
    }
}

impl From<Preference> for bool {
    fn from(preference: Preference) -> Self {
        preference.is_like()
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::Like => write!(f, "like"),
            Preference::Dislike => write!(f, "dislike"),
        }
    }
}

/// One directional judgment of `acting_user` about `target_user`
///
/// `match_id` is present iff `matched` is true. Records are immutable once
/// written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeDecision {
    pub acting_user: UserId,
    pub target_user: UserId,
    pub preference: Preference,
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
    pub swiped_at: DateTime<Utc>,
}

impl SwipeDecision {
    pub fn unmatched(acting_user: UserId, target_user: UserId, preference: Preference) -> Self {
        Self {
            acting_user,
            target_user,
            preference,
            matched: false,
            match_id: None,
            swiped_at: Utc::now(),
        }
    }

    /// A like that confirmed mutuality
    pub fn matched(acting_user: UserId, target_user: UserId, match_id: MatchId) -> Self {
        Self {
            acting_user,
            target_user,
            preference: Preference::Like,
            matched: true,
            match_id: Some(match_id),
            swiped_at: Utc::now(),
        }
    }

    /// Mark this (like) decision as the one that confirmed the match
    pub fn confirm_match(mut self, match_id: MatchId) -> Self {
        self.matched = true;
        self.match_id = Some(match_id);
        self
    }

    pub fn pair(&self) -> PairKey {
        PairKey::new(&self.acting_user, &self.target_user)
    }
}

/// Result of recording one swipe
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeOutcome {
    pub matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<MatchId>,
}

impl SwipeOutcome {
    pub fn unmatched() -> Self {
        Self { matched: false, match_id: None }
    }

    pub fn matched(match_id: MatchId) -> Self {
        Self { matched: true, match_id: Some(match_id) }
    }
}

/// Latitude / longitude in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> SharedResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(SharedError::InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Great-circle (haversine) distance in kilometers
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
        2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
    }
}

/// Search-facing projection of a user account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub location: GeoPoint,
}

/// Optional discovery constraints supplied by the client
///
/// Absence means "no constraint". Zero ages and distances and blank genders
/// are treated as absent, which is how clients that always send every
/// field say "don't care".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_km: Option<u32>,
}

impl DiscoverFilters {
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }

    pub fn min_age(&self) -> Option<u32> {
        self.min_age.filter(|age| *age > 0)
    }

    pub fn max_age(&self) -> Option<u32> {
        self.max_age.filter(|age| *age > 0)
    }

    pub fn max_distance_km(&self) -> Option<u32> {
        self.max_distance_km.filter(|km| *km > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.gender().is_none()
            && self.min_age().is_none()
            && self.max_age().is_none()
            && self.max_distance_km().is_none()
    }
}
