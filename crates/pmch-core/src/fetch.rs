//! Offline-first data loading (stale-while-revalidate).
//!
//! A [`CachedFetch`] owns the state of one resource view. Each run of the
//! refresh protocol:
//!
//! 1. enters the loading state and clears any error,
//! 2. publishes the persisted entry for the key, if there is one, so the
//!    view has content before the network answers,
//! 3. calls the producer (bounded by a timeout); fresh data is published
//!    and persisted, while a failure is only surfaced when there is no data
//!    to show,
//! 4. leaves the loading state.
//!
//! Listeners registered with [`CachedFetch::subscribe`] see every state
//! change in order. Every run carries the generation it was started in;
//! once `start`, `refresh`, `reload` or `dispose` moves the generation on,
//! whatever the old run still publishes is dropped. `abort` alone is not
//! enough since it only lands at the task's next await.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use futures::future::BoxFuture;
use serde::{de::DeserializeOwned, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheManager};

/// Upper bound on a single producer call.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Shown when a failure carries no message of its own.
const FALLBACK_ERROR: &str = "Failed to load data";

pub type FetchFuture<T> = BoxFuture<'static, anyhow::Result<T>>;

/// Asynchronous source of fresh data for one key.
pub type Producer<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;

/// Wrap an async closure as a [`Producer`].
pub fn producer<T, F, Fut>(f: F) -> Producer<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    Arc::new(move || -> FetchFuture<T> { Box::pin(f()) })
}

/// What a view should render.
///
/// `last_updated` is set exactly when `data` is, and `error` is only ever
/// set while `data` is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Unix epoch milliseconds.
    pub last_updated: Option<i64>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_updated: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Nothing to show yet and still waiting.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

type Listener<T> = Arc<dyn Fn(&FetchState<T>) + Send + Sync>;

struct Source<T> {
    key: String,
    producer: Producer<T>,
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            producer: Arc::clone(&self.producer),
        }
    }
}

struct Inner<T> {
    cache: CacheManager,
    timeout: Duration,
    source: Mutex<Option<Source<T>>>,
    state: Mutex<FetchState<T>>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_listener_id: AtomicU64,
    disposed: AtomicBool,
    generation: AtomicU64,
    task: Mutex<Option<JoinHandle<()>>>,
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    // Listener panics must not wedge the view.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T> Inner<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        !self.disposed.load(Ordering::Acquire)
            && self.generation.load(Ordering::Acquire) == generation
    }

    /// Apply `apply` and notify listeners, unless `generation` is stale.
    fn update(&self, generation: u64, apply: impl FnOnce(&mut FetchState<T>)) {
        let snapshot = {
            // Checked under the state lock so a superseded run cannot write
            // after a reset.
            let mut state = lock(&self.state);
            if !self.is_current(generation) {
                return;
            }
            apply(&mut state);
            state.clone()
        };

        // Call outside the lock so listeners may (un)subscribe.
        let listeners: Vec<Listener<T>> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    async fn run(&self, generation: u64) {
        let Some(Source { key, producer }) = lock(&self.source).clone() else {
            warn!("Refresh requested before start");
            return;
        };

        self.update(generation, |s| {
            s.loading = true;
            s.error = None;
        });

        let cached = self.cache.load::<T>(&key).await;
        let had_cache = cached.is_some();
        if let Some(CacheEntry { data, timestamp }) = cached {
            debug!(cache = %key, timestamp, "Showing cached data");
            self.update(generation, |s| {
                s.data = Some(data);
                s.last_updated = Some(timestamp);
            });
        }

        let message = match tokio::time::timeout(self.timeout, producer()).await {
            Ok(Ok(fresh)) => {
                let entry = CacheEntry::new(fresh);
                let published = entry.clone();
                self.update(generation, |s| {
                    s.data = Some(published.data);
                    s.last_updated = Some(published.timestamp);
                    s.error = None;
                });
                // A late result after dispose must not touch the cache either.
                if !self.disposed.load(Ordering::Acquire) {
                    self.cache.save_entry(&key, &entry).await;
                }
                debug!(cache = %key, "Fetched fresh data");
                None
            }
            Ok(Err(e)) => Some(format!("{:#}", e)),
            Err(_) => Some(format!(
                "Request timed out after {}s",
                self.timeout.as_secs_f32()
            )),
        };

        if let Some(message) = message {
            if had_cache {
                debug!(cache = %key, error = %message, "Fetch failed, keeping cached data");
            } else {
                warn!(cache = %key, error = %message, "Fetch failed");
            }
            let message = if message.trim().is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                message
            };
            self.update(generation, |s| {
                if s.data.is_none() {
                    s.error = Some(message);
                }
            });
        }

        self.update(generation, |s| s.loading = false);
    }
}

/// Live view of "best currently known data" for one cache key.
pub struct CachedFetch<T> {
    inner: Arc<Inner<T>>,
}

impl<T> CachedFetch<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(cache: CacheManager) -> Self {
        Self::with_timeout(cache, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(cache: CacheManager, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                cache,
                timeout,
                source: Mutex::new(None),
                state: Mutex::new(FetchState::default()),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                task: Mutex::new(None),
            }),
        }
    }

    /// Bind `key` and `producer` and run the refresh protocol in the
    /// background. Starting again with another key resets the state and
    /// supersedes the previous run. Must be called inside a Tokio runtime.
    pub fn start(&self, key: impl Into<String>, producer: Producer<T>) {
        if self.is_disposed() {
            return;
        }
        let key = key.into();
        let key_changed = {
            let mut source = lock(&self.inner.source);
            let changed = source.as_ref().map_or(true, |s| s.key != key);
            *source = Some(Source { key, producer });
            changed
        };
        let generation = self.inner.next_generation();
        if key_changed {
            self.inner.update(generation, |s| *s = FetchState::default());
        }
        self.spawn_run(generation);
    }

    /// Re-run the full protocol in the background, superseding any run
    /// still in flight.
    pub fn refresh(&self) {
        if self.is_disposed() {
            return;
        }
        let generation = self.inner.next_generation();
        self.spawn_run(generation);
    }

    fn spawn_run(&self, generation: u64) {
        let mut task = lock(&self.inner.task);
        if let Some(previous) = task.take() {
            previous.abort();
        }
        let inner = Arc::clone(&self.inner);
        *task = Some(tokio::spawn(async move { inner.run(generation).await }));
    }

    /// Run the protocol to completion on the current task, superseding any
    /// background run.
    pub async fn reload(&self) {
        if self.is_disposed() {
            return;
        }
        let generation = self.inner.next_generation();
        if let Some(previous) = lock(&self.inner.task).take() {
            previous.abort();
        }
        self.inner.run(generation).await;
    }

    /// Register `listener` and call it with the current state right away.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&FetchState<T>) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener<T> = Arc::new(listener);
        if !self.is_disposed() {
            lock(&self.inner.listeners).push((id, Arc::clone(&listener)));
            listener(&self.state());
        }
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        lock(&self.inner.state).clone()
    }

    /// Borrow the current state without cloning it. `f` runs under the
    /// state lock, so it must not call back into this fetch.
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&lock(&self.inner.state))
    }

    pub fn key(&self) -> Option<String> {
        lock(&self.inner.source).as_ref().map(|s| s.key.clone())
    }

    /// Stop for good: abort the in-flight run, drop listeners, and ignore
    /// anything that still arrives.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.inner.next_generation();
        if let Some(task) = lock(&self.inner.task).take() {
            task.abort();
        }
        lock(&self.inner.listeners).clear();
        debug!(cache = ?self.key(), "Fetch disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }
}

impl<T> Drop for CachedFetch<T> {
    fn drop(&mut self) {
        self.inner.disposed.store(true, Ordering::Release);
        if let Some(task) = lock(&self.inner.task).take() {
            task.abort();
        }
    }
}

/// Handle returned by [`CachedFetch::subscribe`]; dropping it unsubscribes.
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Inner<T>>,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner.listeners).retain(|(id, _)| *id != self.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::now_millis;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    type States = Arc<Mutex<Vec<FetchState<Vec<String>>>>>;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn recording(fetch: &CachedFetch<Vec<String>>) -> (States, Subscription<Vec<String>>) {
        let states: States = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&states);
        let sub = fetch.subscribe(move |s| sink.lock().unwrap().push(s.clone()));
        (states, sub)
    }

    fn ok_producer(items: &'static [&'static str]) -> Producer<Vec<String>> {
        producer(move || async move { Ok(names(items)) })
    }

    fn failing_producer() -> Producer<Vec<String>> {
        producer(|| async { Err(anyhow::anyhow!("connection refused")) })
    }

    async fn wait_until<T>(fetch: &CachedFetch<T>, pred: impl Fn(&FetchState<T>) -> bool)
    where
        T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        for _ in 0..400 {
            if pred(&fetch.state()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("state never reached expected condition");
    }

    #[tokio::test]
    async fn test_cached_data_published_before_network() {
        let cache = CacheManager::in_memory();
        let entry = CacheEntry {
            data: names(&["Cardiology"]),
            timestamp: 1_700_000_000_000,
        };
        cache.put_entry("departments", &entry).await.unwrap();

        let gate = Arc::new(Notify::new());
        let gate_in = Arc::clone(&gate);
        let fetch = CachedFetch::new(cache.clone());
        let (states, _sub) = recording(&fetch);

        fetch.start(
            "departments",
            producer(move || {
                let gate = Arc::clone(&gate_in);
                async move {
                    gate.notified().await;
                    Ok(names(&["Cardiology", "Dermatology"]))
                }
            }),
        );

        wait_until(&fetch, |s| s.data.is_some()).await;
        let shown = fetch.state();
        assert_eq!(shown.data, Some(names(&["Cardiology"])));
        assert_eq!(shown.last_updated, Some(1_700_000_000_000));
        assert!(shown.loading);

        gate.notify_one();
        wait_until(&fetch, |s| !s.loading).await;
        let done = fetch.state();
        assert_eq!(done.data, Some(names(&["Cardiology", "Dermatology"])));
        assert!(done.last_updated.unwrap() > 1_700_000_000_000);

        // Never an empty frame once the cached copy was shown
        let states = states.lock().unwrap();
        let first_data = states.iter().position(|s| s.data.is_some()).unwrap();
        assert!(states[first_data..].iter().all(|s| s.data.is_some()));
    }

    #[tokio::test]
    async fn test_success_updates_state_and_cache() {
        let cache = CacheManager::in_memory();
        let fetch = CachedFetch::new(cache.clone());
        let before = now_millis();
        fetch.start("faqs", ok_producer(&["q1", "q2"]));
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;

        let state = fetch.state();
        assert_eq!(state.data, Some(names(&["q1", "q2"])));
        assert!(!state.loading);
        assert!(state.error.is_none());
        let updated = state.last_updated.unwrap();
        assert!(updated >= before && updated <= now_millis());

        let stored = cache.load::<Vec<String>>("faqs").await.unwrap();
        assert_eq!(stored.data, names(&["q1", "q2"]));
        assert_eq!(stored.timestamp, updated);
    }

    #[tokio::test]
    async fn test_failure_with_cache_keeps_data_without_error() {
        let cache = CacheManager::in_memory();
        cache.put("contacts", &names(&["108"])).await.unwrap();
        let stored_at = cache.load::<Vec<String>>("contacts").await.unwrap().timestamp;

        let fetch = CachedFetch::new(cache.clone());
        fetch.start("contacts", failing_producer());
        wait_until(&fetch, |s| !s.loading && s.last_updated.is_some()).await;

        let state = fetch.state();
        assert_eq!(state.data, Some(names(&["108"])));
        assert_eq!(state.last_updated, Some(stored_at));
        assert!(state.error.is_none());
        // Cache untouched by the failure
        assert_eq!(cache.load::<Vec<String>>("contacts").await.unwrap().data, names(&["108"]));
    }

    #[tokio::test]
    async fn test_failure_without_cache_surfaces_error() {
        let fetch = CachedFetch::new(CacheManager::in_memory());
        let (states, _sub) = recording(&fetch);
        fetch.start("faqs", failing_producer());
        wait_until(&fetch, |s| s.error.is_some() && !s.loading).await;

        let state = fetch.state();
        assert!(state.data.is_none());
        assert!(state.last_updated.is_none());
        assert!(state.error.as_deref().unwrap().contains("connection refused"));

        // Only loading was observed before the failure resolved
        let states = states.lock().unwrap();
        assert!(states.iter().all(|s| s.data.is_none()));
        assert!(states.iter().any(|s| s.loading && s.error.is_none()));
    }

    #[tokio::test]
    async fn test_empty_error_message_gets_fallback() {
        let fetch: CachedFetch<Vec<String>> = CachedFetch::new(CacheManager::in_memory());
        fetch.start("faqs", producer(|| async { Err(anyhow::anyhow!("")) }));
        wait_until(&fetch, |s| s.error.is_some()).await;
        assert_eq!(fetch.state().error.as_deref(), Some(FALLBACK_ERROR));
    }

    #[tokio::test]
    async fn test_producer_timeout_is_failure() {
        let fetch: CachedFetch<Vec<String>> =
            CachedFetch::with_timeout(CacheManager::in_memory(), Duration::from_millis(20));
        fetch.start(
            "opd_timings",
            producer(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Vec::new())
            }),
        );
        wait_until(&fetch, |s| s.error.is_some()).await;

        let state = fetch.state();
        assert!(state.error.unwrap().contains("timed out"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_refresh_clears_error_and_recovers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let fetch = CachedFetch::new(CacheManager::in_memory());
        fetch.start(
            "faqs",
            producer(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(anyhow::anyhow!("offline"))
                    } else {
                        Ok(names(&["back online"]))
                    }
                }
            }),
        );
        wait_until(&fetch, |s| s.error.is_some()).await;

        fetch.refresh();
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;
        let state = fetch.state();
        assert!(state.error.is_none());
        assert_eq!(state.data, Some(names(&["back online"])));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_data() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        // Cache writes are lost, so the second run has no persisted entry.
        let cache = CacheManager::new(Arc::new(tests_support::DropWrites));
        let fetch = CachedFetch::new(cache);
        fetch.start(
            "faqs",
            producer(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Ok(names(&["first"]))
                    } else {
                        Err(anyhow::anyhow!("offline"))
                    }
                }
            }),
        );
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;

        fetch.reload().await;
        let state = fetch.state();
        assert_eq!(state.data, Some(names(&["first"])));
        assert!(state.error.is_none());
        assert!(state.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_dispose_discards_late_result() {
        let cache = CacheManager::in_memory();
        let gate = Arc::new(Notify::new());
        let gate_in = Arc::clone(&gate);
        let fetch = CachedFetch::new(cache.clone());
        let (states, _sub) = recording(&fetch);
        fetch.start(
            "contacts",
            producer(move || {
                let gate = Arc::clone(&gate_in);
                async move {
                    gate.notified().await;
                    Ok(names(&["late"]))
                }
            }),
        );
        wait_until(&fetch, |s| s.loading).await;

        fetch.dispose();
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(fetch.state().data.is_none());
        assert!(states.lock().unwrap().iter().all(|s| s.data.is_none()));
        assert!(cache.load::<Vec<String>>("contacts").await.is_none());

        // Further calls are no-ops
        fetch.refresh();
        fetch.reload().await;
        assert!(fetch.state().data.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_notifications() {
        let fetch = CachedFetch::new(CacheManager::in_memory());
        let (states, sub) = recording(&fetch);
        assert_eq!(states.lock().unwrap().len(), 1);

        sub.unsubscribe();
        fetch.start("faqs", ok_producer(&["x"]));
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;
        assert_eq!(states.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_start_with_new_key_resets_state() {
        let cache = CacheManager::in_memory();
        cache.put("department_1", &names(&["Orthopaedics"])).await.unwrap();

        let fetch = CachedFetch::new(cache);
        fetch.start("department_1", failing_producer());
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;

        fetch.start("department_2", failing_producer());
        assert_eq!(fetch.key().as_deref(), Some("department_2"));
        wait_until(&fetch, |s| s.error.is_some()).await;
        assert!(fetch.state().data.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_superseded_run_cannot_leak_into_new_key() {
        let entered = Arc::new(AtomicBool::new(false));
        let entered_in = Arc::clone(&entered);
        let fetch = CachedFetch::new(CacheManager::in_memory());

        // Blocks inside a single poll, so abort cannot stop it before it
        // publishes.
        fetch.start(
            "department_1",
            producer(move || {
                let entered = Arc::clone(&entered_in);
                async move {
                    entered.store(true, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(150));
                    Ok(names(&["Orthopaedics (dept 1)"]))
                }
            }),
        );
        for _ in 0..200 {
            if entered.load(Ordering::SeqCst) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert!(entered.load(Ordering::SeqCst));

        fetch.start(
            "department_2",
            producer(|| async { Err(anyhow::anyhow!("offline")) }),
        );
        tokio::time::sleep(Duration::from_millis(300)).await;

        let state = fetch.state();
        assert_eq!(fetch.key().as_deref(), Some("department_2"));
        assert!(state.data.is_none());
        assert!(state.last_updated.is_none());
        assert_eq!(state.error.as_deref(), Some("offline"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_refresh_supersedes_earlier_run() {
        let gate = Arc::new(Notify::new());
        let gate_in = Arc::clone(&gate);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let fetch = CachedFetch::new(CacheManager::in_memory());
        fetch.start(
            "faqs",
            producer(move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let gate = Arc::clone(&gate_in);
                async move {
                    if n == 0 {
                        gate.notified().await;
                        Ok(names(&["stale"]))
                    } else {
                        Ok(names(&["fresh"]))
                    }
                }
            }),
        );
        wait_until(&fetch, |s| s.loading).await;

        fetch.refresh();
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;
        gate.notify_one();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(fetch.state().data, Some(names(&["fresh"])));
    }

    #[tokio::test]
    async fn test_with_state_borrows_current_data() {
        let fetch = CachedFetch::new(CacheManager::in_memory());
        assert_eq!(fetch.with_state(|s| s.data.as_ref().map(Vec::len)), None);

        fetch.start("faqs", ok_producer(&["q1", "q2", "q3"]));
        wait_until(&fetch, |s| s.data.is_some() && !s.loading).await;
        assert_eq!(fetch.with_state(|s| s.data.as_ref().map(Vec::len)), Some(3));
    }

    #[test]
    fn test_is_initial_load() {
        let mut state: FetchState<Vec<String>> = FetchState::default();
        assert!(!state.is_initial_load());
        state.loading = true;
        assert!(state.is_initial_load());
        state.data = Some(names(&["cached"]));
        assert!(!state.is_initial_load());
    }

    #[tokio::test]
    async fn test_reload_before_start_is_noop() {
        let fetch: CachedFetch<Vec<String>> = CachedFetch::new(CacheManager::in_memory());
        fetch.reload().await;
        assert_eq!(fetch.state(), FetchState::default());
    }

    mod tests_support {
        use async_trait::async_trait;

        use crate::cache::{KeyValueStore, StorageError};

        /// Accepts writes and forgets them.
        pub struct DropWrites;

        #[async_trait]
        impl KeyValueStore for DropWrites {
            async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }

            async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Ok(())
            }

            async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
                Ok(())
            }
        }
    }
}
