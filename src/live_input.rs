//! Debounced transliteration of a live text field (the participant's name).
//!
//! Each keystroke bumps a request id and restarts the debounce timer. When
//! the timer fires, one request is issued; its response is applied only if
//! its id is still the latest one issued, so stale responses are dropped.

use crate::transliteration::Transliterator;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Value of the Devanagari field and whether a request is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: String,
    pub translating: bool,
}

struct Inner {
    transliterator: Arc<dyn Transliterator>,
    debounce: Duration,
    latest: AtomicU64,
    timer: Mutex<Option<JoinHandle<()>>>,
    field: watch::Sender<FieldState>,
}

impl Inner {
    fn is_latest(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }

    fn apply(&self, id: u64, value: String) {
        if !self.is_latest(id) {
            tracing::debug!("Dropping stale transliteration response #{}", id);
            return;
        }
        self.field.send_replace(FieldState {
            value,
            translating: false,
        });
    }
}

/// Live transliteration of one input field. Cheap to clone; clones share
/// the same field.
#[derive(Clone)]
pub struct LiveTransliteration {
    inner: Arc<Inner>,
}

impl LiveTransliteration {
    pub fn new(transliterator: Arc<dyn Transliterator>, debounce: Duration) -> Self {
        let (field, _) = watch::channel(FieldState::default());
        Self {
            inner: Arc::new(Inner {
                transliterator,
                debounce,
                latest: AtomicU64::new(0),
                timer: Mutex::new(None),
                field,
            }),
        }
    }

    /// Current state of the Devanagari field.
    pub fn current(&self) -> FieldState {
        self.inner.field.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldState> {
        self.inner.field.subscribe()
    }

    /// Handles a change of the Latin input. Must be called from within a
    /// tokio runtime.
    pub fn on_input(&self, text: &str) {
        let id = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let mut timer = match self.inner.timer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(pending) = timer.take() {
            pending.abort();
        }

        if text.trim().is_empty() {
            self.inner.field.send_replace(FieldState::default());
            return;
        }

        self.inner.field.send_modify(|state| state.translating = true);

        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            if !inner.is_latest(id) {
                return;
            }
            // The request runs detached from the timer: a later keystroke
            // cancels only pending timers, in-flight responses are filtered by id.
            tokio::spawn(async move {
                tracing::debug!("Issuing transliteration request #{} for '{}'", id, text);
                let value = match inner.transliterator.transliterate(&text).await {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::warn!("Transliteration failed, keeping Latin text: {}", e);
                        text
                    }
                };
                inner.apply(id, value);
            });
        }));
    }
}
