use crate::api::defillama::{DefiLlamaApi, StatsProvider};
use crate::config::Config;
use crate::error::ErrorKind;
use crate::models::cache::{CacheLookup, StatsCache};
use crate::models::mappings::resolve_slug;
use crate::models::stats::ProtocolStatistics;
use crate::utils::clock::{Clock, SystemClock};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// What a consumer sees for one tool identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsState {
    pub statistics: Option<ProtocolStatistics>,
    pub is_loading: bool,
    pub error: Option<ErrorKind>,
}

impl StatsState {
    pub fn loading() -> Self {
        Self {
            statistics: None,
            is_loading: true,
            error: None,
        }
    }

    /// Settled with nothing to show, e.g. a tool with no known provider.
    pub fn empty() -> Self {
        Self {
            statistics: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn ready(statistics: ProtocolStatistics) -> Self {
        Self {
            statistics: Some(statistics),
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(error: ErrorKind) -> Self {
        Self {
            statistics: None,
            is_loading: false,
            error: Some(error),
        }
    }
}

/// Result of the network-free part of a lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Answerable without the provider.
    Settled(StatsState),
    /// The slug has to be fetched.
    Fetch(&'static str),
}

/// Resolves tool identifiers to live statistics through a shared cache.
///
/// Cloning is cheap and every clone shares the same cache.
#[derive(Clone)]
pub struct StatsService {
    provider: Arc<dyn StatsProvider>,
    cache: Arc<StatsCache>,
    clock: Arc<dyn Clock>,
}

impl StatsService {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            Arc::new(DefiLlamaApi::new(config)),
            Arc::new(StatsCache::new()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_parts(
        provider: Arc<dyn StatsProvider>,
        cache: Arc<StatsCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            provider,
            cache,
            clock,
        }
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn resolve(&self, tool_id: &str) -> Resolution {
        let Some(slug) = resolve_slug(tool_id) else {
            debug!("No provider slug for {}", tool_id);
            return Resolution::Settled(StatsState::empty());
        };

        match self.cache.resolve(slug, self.clock.now_millis()) {
            CacheLookup::Fresh(statistics) => {
                debug!("Cache hit for {}", slug);
                Resolution::Settled(StatsState::ready(statistics))
            }
            CacheLookup::Stale(_) => {
                debug!("Cache entry for {} expired", slug);
                Resolution::Fetch(slug)
            }
            CacheLookup::Missing => {
                debug!("Cache miss for {}", slug);
                Resolution::Fetch(slug)
            }
        }
    }

    /// Returns the settled state for `tool_id`, fetching at most once if the
    /// cached entry is missing or expired.
    pub async fn get_statistics(&self, tool_id: &str) -> StatsState {
        match self.resolve(tool_id) {
            Resolution::Settled(state) => state,
            Resolution::Fetch(slug) => self.refresh(slug).await,
        }
    }

    /// Settles several identifiers concurrently, in input order.
    pub async fn get_many(&self, tool_ids: &[String]) -> Vec<(String, StatsState)> {
        let states = join_all(tool_ids.iter().map(|id| self.get_statistics(id))).await;
        tool_ids.iter().cloned().zip(states).collect()
    }

    /// Watches the state of `tool_id`. The first value is `loading` when a
    /// fetch is needed; the fetch runs on a spawned task and publishes the
    /// settled state. Must be called from within a Tokio runtime.
    ///
    /// Dropping the receiver early does not cancel the fetch, and its result
    /// still lands in the cache.
    pub fn subscribe(&self, tool_id: &str) -> watch::Receiver<StatsState> {
        match self.resolve(tool_id) {
            Resolution::Settled(state) => watch::channel(state).1,
            Resolution::Fetch(slug) => {
                let (tx, rx) = watch::channel(StatsState::loading());
                let service = self.clone();
                tokio::spawn(async move {
                    let state = service.refresh(slug).await;
                    if tx.send(state).is_err() {
                        debug!("Subscriber for {} went away before fetch finished", slug);
                    }
                });
                rx
            }
        }
    }

    async fn refresh(&self, slug: &str) -> StatsState {
        match self.provider.fetch_protocol(slug).await {
            Ok(statistics) => {
                self.cache.store(slug, statistics, self.clock.now_millis());
                info!("Fetched statistics for {}", slug);
                StatsState::ready(statistics)
            }
            Err(e) => {
                warn!("Failed to fetch statistics for {}: {}", slug, e);
                StatsState::failed(ErrorKind::from(&e))
            }
        }
    }
}
