//! Process-wide cart context.
//!
//! One owner of the cart for every screen. Readers borrow the store through
//! [`CartContext::read`]; views that only need the badge count or totals
//! subscribe to snapshots published after each update.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::cart::{CartStore, CartTotals};

/// What subscribers see after every cart update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Sum of quantities (header badge).
    pub item_count: i64,
    pub line_count: usize,
    pub applied_promo_code: Option<String>,
    pub totals: CartTotals,
}

impl CartSnapshot {
    pub fn of(store: &CartStore) -> Self {
        Self {
            item_count: store.item_count(),
            line_count: store.items().len(),
            applied_promo_code: store.applied_promo_code().map(str::to_string),
            totals: store.totals(),
        }
    }
}

struct Inner {
    store: Mutex<CartStore>,
    tx: watch::Sender<CartSnapshot>,
}

/// Shared handle to the session's cart. Clones refer to the same cart.
#[derive(Clone)]
pub struct CartContext {
    inner: Arc<Inner>,
}

impl CartContext {
    pub fn new(store: CartStore) -> Self {
        let (tx, _rx) = watch::channel(CartSnapshot::of(&store));
        Self {
            inner: Arc::new(Inner {
                store: Mutex::new(store),
                tx,
            }),
        }
    }

    /// Run `f` against the current cart.
    pub fn read<R>(&self, f: impl FnOnce(&CartStore) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the cart and publish a fresh snapshot.
    pub fn update<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        let mut store = self.lock();
        let result = f(&mut store);
        self.inner.tx.send_replace(CartSnapshot::of(&store));
        result
    }

    /// Receive a snapshot after every update.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.tx.borrow().clone()
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.inner.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new(CartStore::default())
    }
}

impl std::fmt::Debug for CartContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartContext")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}
