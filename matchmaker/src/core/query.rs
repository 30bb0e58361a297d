//! Candidate filter builder
//!
//! Turns an exclusion set, the client's optional filters and the requester's
//! location into a [`CandidateQuery`]: a flat AND-list of typed clauses. The
//! list is backend neutral; each index implementation either evaluates the
//! clauses itself or serializes them into its own wire format.

use std::collections::BTreeSet;

use shared::{DiscoverFilters, GeoPoint, UserId, UserProfile};

/// Profile attributes a clause can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Gender,
    Age,
    Location,
}

impl ProfileField {
    /// Field name in the indexed document
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Gender => "gender",
            ProfileField::Age => "age",
            ProfileField::Location => "location",
        }
    }
}

/// One constraint on the candidate set
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Exact match on a keyword field
    Term { field: ProfileField, value: String },
    /// Inclusive numeric range; an absent bound is open-ended
    Range {
        field: ProfileField,
        gte: Option<u32>,
        lte: Option<u32>,
    },
    /// Within `radius_km` of `center`
    GeoRadius {
        field: ProfileField,
        center: GeoPoint,
        radius_km: u32,
    },
    /// Candidate id must not be in the set. Never empty.
    ExcludeIds(BTreeSet<UserId>),
}

impl Clause {
    /// Evaluate this clause against a profile
    pub fn matches(&self, profile: &UserProfile) -> bool {
        match self {
            Clause::Term { field, value } => match field {
                ProfileField::Gender => profile.gender == *value,
                ProfileField::Age => profile.age.to_string() == *value,
                ProfileField::Location => false,
            },
            Clause::Range { field, gte, lte } => {
                let ProfileField::Age = field else {
                    return false;
                };
                gte.map_or(true, |min| profile.age >= min) && lte.map_or(true, |max| profile.age <= max)
            }
            Clause::GeoRadius { center, radius_km, .. } => {
                center.distance_km(&profile.location) <= f64::from(*radius_km)
            }
            Clause::ExcludeIds(ids) => !ids.contains(&profile.user_id),
        }
    }
}

/// AND-list of clauses plus an optional result limit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateQuery {
    clauses: Vec<Clause>,
    limit: Option<usize>,
}

impl CandidateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// No clause at all: the whole index matches
    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Ids removed by the exclusion clause, if any
    pub fn excluded_ids(&self) -> Option<&BTreeSet<UserId>> {
        self.clauses.iter().find_map(|clause| match clause {
            Clause::ExcludeIds(ids) => Some(ids),
            _ => None,
        })
    }

    /// A profile is a candidate iff it satisfies every clause
    pub fn matches(&self, profile: &UserProfile) -> bool {
        self.clauses.iter().all(|clause| clause.matches(profile))
    }
}

/// Compose the discovery query
///
/// Clauses are only added for constraints that are actually present; an
/// empty exclusion set adds nothing.
pub fn build_query(excluded_ids: &[UserId], filters: &DiscoverFilters, origin: GeoPoint) -> CandidateQuery {
    let mut query = CandidateQuery::new();

    if !excluded_ids.is_empty() {
        query = query.with_clause(Clause::ExcludeIds(excluded_ids.iter().cloned().collect()));
    }

    if let Some(gender) = filters.gender() {
        query = query.with_clause(Clause::Term {
            field: ProfileField::Gender,
            value: gender.to_string(),
        });
    }

    let (min_age, max_age) = (filters.min_age(), filters.max_age());
    if min_age.is_some() || max_age.is_some() {
        query = query.with_clause(Clause::Range {
            field: ProfileField::Age,
            gte: min_age,
            lte: max_age,
        });
    }

    if let Some(radius_km) = filters.max_distance_km() {
        query = query.with_clause(Clause::GeoRadius {
            field: ProfileField::Location,
            center: origin,
            radius_km,
        });
    }

    query
}
