use futures::channel::oneshot;
use futures::future::{FutureExt, Shared};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cooperative cancellation shared between a run and whoever may stop it.
///
/// Send and receive loops poll [`CancelSignal::is_cancelled`] between
/// iterations only, so a request never interrupts an in-flight frame.
/// Listeners that need to block (e.g. a server's graceful shutdown) await
/// [`CancelSignal::cancelled`].
#[derive(Clone)]
pub struct CancelSignal {
    inner: Arc<CancelInner>,
    notified: Shared<oneshot::Receiver<()>>,
}

struct CancelInner {
    flag: AtomicBool,
    trigger: Mutex<Option<oneshot::Sender<()>>>,
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            inner: Arc::new(CancelInner {
                flag: AtomicBool::new(false),
                trigger: Mutex::new(Some(tx)),
            }),
            notified: rx.shared(),
        }
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.inner.flag.store(true, Ordering::Release);

        if let Ok(mut trigger) = self.inner.trigger.lock() {
            if let Some(tx) = trigger.take() {
                let _ = tx.send(());
            }
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.flag.load(Ordering::Acquire)
    }

    /// Resolves once [`CancelSignal::cancel`] has been called on any clone.
    pub async fn cancelled(&self) {
        if self.is_cancelled() {
            return;
        }
        let _ = self.notified.clone().await;
    }
}

impl fmt::Debug for CancelSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelSignal")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
