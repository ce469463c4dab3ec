//! Trailing-edge debouncing for async callbacks.
//!
//! A [`Debouncer`] wraps a callback and a delay window. Every [`Debouncer::call`]
//! restarts the window with new arguments; the callback only runs for the last
//! arguments once the window passes without another call.
//!
//! Cancellation is a generation counter: each call bumps it and tags its timer
//! task with the new value. A timer that wakes up with a stale generation does
//! nothing. The previous timer is also aborted so it does not linger, but the
//! generation check is what makes supersession exact.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

type BoxedCallback<A> =
    Box<dyn Fn(A) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// The single scheduled invocation a debouncer may have outstanding.
struct PendingCall {
    generation: u64,
    handle: JoinHandle<()>,
}

struct Inner<A> {
    delay: Duration,
    /// Bumped by every `call` and `cancel`.
    generation: AtomicU64,
    /// Generation of the last timer that passed its check and fired.
    fired: AtomicU64,
    pending: Mutex<Option<PendingCall>>,
    callback: BoxedCallback<A>,
}

impl<A> Inner<A> {
    fn pending(&self) -> MutexGuard<'_, Option<PendingCall>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Debounced handle around a callback. Clones share the same timer state.
pub struct Debouncer<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Wraps `callback` so that bursts of calls within `delay` collapse into one.
pub fn debounce<A, F, Fut>(callback: F, delay: Duration) -> Debouncer<A>
where
    A: Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Debouncer::new(callback, delay)
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F, Fut>(callback: F, delay: Duration) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let boxed: BoxedCallback<A> =
            Box::new(move |args: A| -> Pin<Box<dyn Future<Output = ()> + Send>> {
                Box::pin(callback(args))
            });
        Self {
            inner: Arc::new(Inner {
                delay,
                generation: AtomicU64::new(0),
                fired: AtomicU64::new(0),
                pending: Mutex::new(None),
                callback: boxed,
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    /// Schedules `args` for delivery after the delay, superseding any call
    /// that has not fired yet. Never runs the callback synchronously, even
    /// with a zero delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call(&self, args: A) {
        let mut pending = self.inner.pending();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(prev) = pending.take() {
            prev.handle.abort();
        }

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;
            if inner.generation.load(Ordering::SeqCst) != generation {
                tracing::trace!(generation, "debounced call superseded");
                return;
            }
            inner.fired.store(generation, Ordering::SeqCst);
            // Run the callback in its own task so aborting this timer later
            // cannot cut an in-flight callback short.
            let callback = tokio::spawn((inner.callback)(args));
            if let Err(err) = callback.await {
                tracing::warn!(generation, "debounced callback failed: {err}");
            }
        });

        *pending = Some(PendingCall { generation, handle });
    }

    /// Drops the pending invocation, if any, without running it.
    pub fn cancel(&self) {
        let mut pending = self.inner.pending();
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(prev) = pending.take() {
            prev.handle.abort();
        }
    }

    /// True while a scheduled invocation is still waiting for its window to pass.
    pub fn is_pending(&self) -> bool {
        let pending = self.inner.pending();
        match pending.as_ref() {
            Some(p) => {
                p.generation == self.inner.generation.load(Ordering::SeqCst)
                    && self.inner.fired.load(Ordering::SeqCst) < p.generation
                    && !p.handle.is_finished()
            }
            None => false,
        }
    }

    /// Waits for the most recent scheduled invocation to fire and its callback
    /// to finish. Returns immediately if nothing is scheduled.
    pub async fn settle(&self) {
        let pending = self.inner.pending().take();
        if let Some(p) = pending {
            // A cancelled timer is fine; it was superseded.
            let _ = p.handle.await;
        }
    }
}
