use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{CacheInvalidator, QueryCache, QueryKey};
use crate::error::ApiError;

/// Shared cache of fetched JSON payloads, keyed by [`QueryKey`].
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache<serde_json::Value>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self { cache: RwSignal::new(QueryCache::new()) }
    }
}

impl QueryClient {
    /// Tracked: readers rerun when the key is invalidated.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.cache.with(|c| c.generation(key))
    }

    fn cached(&self, key: &QueryKey) -> (Option<serde_json::Value>, bool) {
        self.cache
            .with_untracked(|c| (c.get(key).cloned(), c.is_stale(key)))
    }

    fn is_current(&self, key: &QueryKey, generation: u64) -> bool {
        self.cache.with_untracked(|c| c.generation(key) == generation)
    }

    fn store(&self, key: QueryKey, generation: u64, value: serde_json::Value) {
        self.cache.update_untracked(|c| {
            if !c.set(key.clone(), generation, value) {
                tracing::debug!(%key, "dropping result of an invalidated fetch");
            }
        });
    }
}

impl CacheInvalidator for QueryClient {
    fn invalidate(&self, key: &QueryKey) {
        tracing::debug!(%key, "invalidating query");
        self.cache.update(|c| c.invalidate(key));
    }
}

pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::default();
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Reactive view of one query.
pub struct QueryState<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<ApiError>>,
    pub fetching: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryState<T> {}

/// Runs `fetch` for `key`, serving a fresh cached value when there is one and
/// refetching whenever the key is invalidated. A stale value stays in `data`
/// until the refetch lands.
pub fn use_query<T, F, Fut>(key: QueryKey, fetch: F) -> QueryState<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    let state = QueryState {
        data: RwSignal::new(None::<T>),
        error: RwSignal::new(None::<ApiError>),
        fetching: RwSignal::new(false),
    };

    let generation = {
        let key = key.clone();
        Memo::new(move |_| client.generation(&key))
    };

    Effect::new(move |_| {
        let generation = generation.get();
        let (cached, stale) = client.cached(&key);
        if let Some(value) = cached.and_then(|v| serde_json::from_value::<T>(v).ok()) {
            if state.data.with_untracked(Option::is_none) {
                state.data.set(Some(value));
            }
            if !stale {
                return;
            }
        }

        state.fetching.set(true);
        let request = fetch();
        let key = key.clone();
        spawn_local(async move {
            let result = request.await;
            if !client.is_current(&key, generation) {
                // superseded by the fetch of a later invalidation
                return;
            }
            match result {
                Ok(value) => {
                    if let Ok(json) = serde_json::to_value(&value) {
                        client.store(key, generation, json);
                    }
                    state.data.try_set(Some(value));
                    state.error.try_set(None);
                }
                Err(e) => {
                    tracing::warn!(%key, error = %e, "query failed");
                    state.error.try_set(Some(e));
                }
            }
            state.fetching.try_set(false);
        });
    });

    state
}
