//! Swipe matching webserver entry point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;

use matchmaker::services::{ElasticsearchIndex, InMemoryDiscoveryIndex, InMemorySwipeLedger, DEFAULT_INDEX};
use matchmaker::{DiscoveryIndex, MatchConsistency, MatchmakerConfig, SwipeStore};
use shared::logging;
use webserver::{
    AppState, IdentityVerifier, JwtIdentityVerifier, RealSigningKeySource, SigningKeySource, WebServer,
    WebServerError, WebServerResult,
};

const COMPONENT: &str = "webserver";

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Swipe recording, match detection and candidate discovery over HTTP")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Budget for all store calls of one request, in milliseconds
    #[arg(long, default_value = "2000")]
    store_timeout_ms: u64,

    /// Like persistence mode: pair-conditional or check-then-write
    #[arg(long, default_value = "pair-conditional")]
    consistency: MatchConsistency,

    /// Accept swipes where acting and target user are the same
    #[arg(long)]
    allow_self_swipe: bool,

    /// Let users discover their own profile
    #[arg(long)]
    include_self_in_discovery: bool,

    /// Maximum candidates returned per discovery request
    #[arg(long, default_value = "50")]
    max_candidates: usize,

    /// Elasticsearch-compatible endpoint; in-memory index when absent
    #[arg(long)]
    index_url: Option<String>,

    /// Index holding user profiles
    #[arg(long, default_value = DEFAULT_INDEX)]
    index_name: String,
}

impl Args {
    fn matchmaker_config(&self) -> MatchmakerConfig {
        MatchmakerConfig::default()
            .with_store_timeout(Duration::from_millis(self.store_timeout_ms))
            .with_consistency(self.consistency)
            .with_self_swipe(self.allow_self_swipe)
            .with_self_exclusion(!self.include_self_in_discovery)
            .with_max_candidates(self.max_candidates)
    }

    fn bind_address(&self) -> WebServerResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid bind address: {e}")))
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(COMPONENT, "Signal handling", &err),
    }
}

async fn serve<S, I>(
    addr: SocketAddr,
    store: Arc<S>,
    index: Arc<I>,
    verifier: Arc<dyn IdentityVerifier>,
    config: MatchmakerConfig,
) -> WebServerResult<()>
where
    S: SwipeStore + 'static,
    I: DiscoveryIndex + 'static,
{
    let state = AppState::new(store, index, verifier, config);
    WebServer::new(state).run(addr, shutdown_signal()).await
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    logging::init_tracing(Some(args.log_level.as_str()));

    let addr = args.bind_address()?;
    let config = args.matchmaker_config();
    logging::log_startup(
        COMPONENT,
        &format!(
            "on {} (consistency: {}, store timeout: {:?})",
            addr, config.consistency, config.store_timeout
        ),
    );

    let signing_key = RealSigningKeySource::new().signing_key().inspect_err(|err| {
        logging::log_error(COMPONENT, "Loading token signing key", err);
    })?;
    let verifier: Arc<dyn IdentityVerifier> = Arc::new(JwtIdentityVerifier::new(&signing_key)?);

    let store = Arc::new(InMemorySwipeLedger::new());

    match args.index_url.as_deref() {
        Some(url) => {
            let index = ElasticsearchIndex::new(url, args.index_name.clone())
                .map_err(|e| WebServerError::config(e.to_string()))?;
            logging::log_success(COMPONENT, &format!("Using discovery index '{}' at {}", index.index_name(), url));
            serve(addr, store, Arc::new(index), verifier, config).await?;
        }
        None => {
            logging::log_success(COMPONENT, "Using in-memory discovery index");
            serve(addr, store, Arc::new(InMemoryDiscoveryIndex::new()), verifier, config).await?;
        }
    }

    logging::log_success(COMPONENT, "WebServer stopped gracefully");
    Ok(())
}
