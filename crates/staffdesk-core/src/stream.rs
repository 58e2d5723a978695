// ── Collection subscriptions ──
//
// What a view holds on to after `ResourceStore::subscribe_collection()`:
// the list as it was when the view last looked, plus a receiver that wakes
// on every commit (fetch, search, create, update-in-place, delete).

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A view's handle on one store's collection.
pub struct EntityStream<T: Clone + Send + Sync + 'static> {
    seen: Arc<Vec<T>>,
    rx: watch::Receiver<Arc<Vec<T>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(rx: watch::Receiver<Arc<Vec<T>>>) -> Self {
        let seen = Arc::clone(&rx.borrow());
        Self { seen, rx }
    }

    /// The list this view last rendered.
    pub fn current(&self) -> &Arc<Vec<T>> {
        &self.seen
    }

    /// What the store holds right now, without marking it seen.
    pub fn latest(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.rx.borrow())
    }

    /// Park until the store commits again. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Arc<Vec<T>>> {
        self.rx.changed().await.ok()?;
        self.seen = Arc::clone(&self.rx.borrow_and_update());
        Some(Arc::clone(&self.seen))
    }

    /// A commit has landed that this view has not picked up yet.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// One item per commit, starting with the list as it stands now.
    pub fn into_stream(self) -> EntityWatchStream<T> {
        EntityWatchStream {
            inner: WatchStream::new(self.rx),
        }
    }
}

/// [`EntityStream`] as a `futures` stream.
pub struct EntityWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Arc<Vec<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for EntityWatchStream<T> {
    type Item = Arc<Vec<T>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
