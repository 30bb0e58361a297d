//! Router builders and request helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use matchmaker::services::{InMemoryDiscoveryIndex, InMemorySwipeLedger};
use matchmaker::{CandidateQuery, DiscoveryIndex, MatchmakerConfig, StoreResult, SwipeStore};
use shared::{UserId, UserProfile};
use webserver::{AppState, IdentityVerifier, JwtIdentityVerifier, WebServer};

use super::fixtures::TestFixtures;

/// Router under test plus a verifier that can mint tokens for it
pub struct TestApp {
    pub router: Router,
    pub verifier: Arc<JwtIdentityVerifier>,
}

impl TestApp {
    /// In-memory ledger and index seeded with the fixture community
    pub fn in_memory(config: MatchmakerConfig) -> Self {
        Self::with_stores(
            Arc::new(InMemorySwipeLedger::new()),
            Arc::new(InMemoryDiscoveryIndex::with_profiles(TestFixtures::community())),
            config,
        )
    }

    pub fn with_stores<S, I>(store: Arc<S>, index: Arc<I>, config: MatchmakerConfig) -> Self
    where
        S: SwipeStore + 'static,
        I: DiscoveryIndex + 'static,
    {
        let verifier = Arc::new(JwtIdentityVerifier::new(TestFixtures::SIGNING_KEY).unwrap());
        let router = Self::router(store, index, verifier.clone(), config);
        Self { router, verifier }
    }

    pub fn router<S, I>(
        store: Arc<S>,
        index: Arc<I>,
        verifier: Arc<dyn IdentityVerifier>,
        config: MatchmakerConfig,
    ) -> Router
    where
        S: SwipeStore + 'static,
        I: DiscoveryIndex + 'static,
    {
        WebServer::new(AppState::new(store, index, verifier, config)).build_router()
    }

    pub fn token(&self, user: &str) -> String {
        self.verifier
            .issue(&TestFixtures::user(user), chrono::Duration::minutes(10))
            .unwrap()
    }

    /// Send a request as `user` (or anonymously) and decode the JSON reply
    pub async fn call(&self, method: Method, uri: &str, user: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let token = user.map(|u| self.token(u));
        send(&self.router, method, uri, token.as_deref(), body).await
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Discovery index whose calls never complete
pub struct StalledIndex;

#[async_trait::async_trait]
impl DiscoveryIndex for StalledIndex {
    async fn get_by_id(&self, _user_id: &UserId) -> StoreResult<Option<UserProfile>> {
        std::future::pending().await
    }

    async fn search(&self, _query: &CandidateQuery) -> StoreResult<Vec<UserProfile>> {
        std::future::pending().await
    }

    async fn upsert(&self, _profile: UserProfile) -> StoreResult<()> {
        std::future::pending().await
    }
}
