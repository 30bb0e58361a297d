//! Elasticsearch-compatible discovery index over HTTP
//!
//! Profiles live in one index (default `users`) with the document shape
//! `{ "UserID", "name", "gender", "age", "location": { "lat", "lon" } }`,
//! `UserID` doubling as the document id. The index mapping itself is
//! provisioned elsewhere.
//!
//! [`search_body`] is the only place that knows how clauses look on the
//! wire: filters go into `bool.filter`, the exclusion set into
//! `bool.must_not` as an `ids` query.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use shared::{component_debug, GeoPoint, UserId, UserProfile};

use crate::core::query::{CandidateQuery, Clause};
use crate::error::{StoreError, StoreResult};
use crate::traits::DiscoveryIndex;

const COMPONENT: &str = "elasticsearch";

pub const DEFAULT_INDEX: &str = "users";

/// Indexed document shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "UserID")]
    user_id: String,
    name: String,
    gender: String,
    age: u32,
    location: GeoPoint,
}

impl From<UserProfile> for UserDocument {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id.into(),
            name: profile.name,
            gender: profile.gender,
            age: profile.age,
            location: profile.location,
        }
    }
}

impl TryFrom<UserDocument> for UserProfile {
    type Error = StoreError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let user_id = UserId::parse(doc.user_id).map_err(|e| StoreError::malformed(e.to_string()))?;
        Ok(UserProfile {
            user_id,
            name: doc.name,
            gender: doc.gender,
            age: doc.age,
            location: doc.location,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(default)]
    found: bool,
    #[serde(rename = "_source")]
    source: Option<UserDocument>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source")]
    source: UserDocument,
}

/// Encode a candidate query as an Elasticsearch search body
pub fn search_body(query: &CandidateQuery) -> Value {
    let mut filter = Vec::new();
    let mut must_not = Vec::new();

    for clause in query.clauses() {
        match clause {
            Clause::Term { field, value } => {
                filter.push(json!({ "term": { field.as_str(): value } }));
            }
            Clause::Range { field, gte, lte } => {
                let mut bounds = serde_json::Map::new();
                if let Some(min) = gte {
                    bounds.insert("gte".to_string(), json!(min));
                }
                if let Some(max) = lte {
                    bounds.insert("lte".to_string(), json!(max));
                }
                filter.push(json!({ "range": { field.as_str(): bounds } }));
            }
            Clause::GeoRadius { field, center, radius_km } => {
                filter.push(json!({
                    "geo_distance": {
                        "distance": format!("{radius_km}km"),
                        field.as_str(): { "lat": center.lat, "lon": center.lon }
                    }
                }));
            }
            Clause::ExcludeIds(ids) => {
                let values: Vec<&str> = ids.iter().map(UserId::as_str).collect();
                must_not.push(json!({ "ids": { "values": values } }));
            }
        }
    }

    let mut bool_query = serde_json::Map::new();
    if !filter.is_empty() {
        bool_query.insert("filter".to_string(), Value::Array(filter));
    }
    if !must_not.is_empty() {
        bool_query.insert("must_not".to_string(), Value::Array(must_not));
    }

    let mut body = json!({ "query": { "bool": bool_query } });
    if let Some(limit) = query.limit() {
        body["size"] = json!(limit);
    }
    body
}

/// Discovery index backed by an Elasticsearch (or OpenSearch) endpoint
#[derive(Debug, Clone)]
pub struct ElasticsearchIndex {
    client: reqwest::Client,
    base_url: reqwest::Url,
    index: String,
}

impl ElasticsearchIndex {
    pub fn new(base_url: &str, index: impl Into<String>) -> StoreResult<Self> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| StoreError::unavailable(format!("invalid index url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::unavailable(format!("index url '{base_url}' cannot carry a path")));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            index: index.into(),
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index
    }

    fn endpoint(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(&self.index).extend(segments);
        }
        url
    }

    async fn error_from(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        StoreError::unavailable(format!("index returned {status}: {body}"))
    }
}

#[async_trait::async_trait]
impl DiscoveryIndex for ElasticsearchIndex {
    async fn get_by_id(&self, user_id: &UserId) -> StoreResult<Option<UserProfile>> {
        let response = self.client.get(self.endpoint(&["_doc", user_id.as_str()])).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let doc: GetResponse = response.json().await?;
        match (doc.found, doc.source) {
            (true, Some(source)) => Ok(Some(source.try_into()?)),
            _ => Ok(None),
        }
    }

    async fn search(&self, query: &CandidateQuery) -> StoreResult<Vec<UserProfile>> {
        let body = search_body(query);
        component_debug!(COMPONENT, "Search body: {}", body);

        let response = self.client.post(self.endpoint(&["_search"])).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let result: SearchResponse = response.json().await?;
        component_debug!(COMPONENT, "Search returned {} hits", result.hits.hits.len());

        result
            .hits
            .hits
            .into_iter()
            .map(|hit| UserProfile::try_from(hit.source))
            .collect()
    }

    async fn upsert(&self, profile: UserProfile) -> StoreResult<()> {
        let id = profile.user_id.to_string();
        let mut url = self.endpoint(&["_doc", &id]);
        url.query_pairs_mut().append_pair("refresh", "true");

        let response = self.client.put(url).json(&UserDocument::from(profile)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }
}
