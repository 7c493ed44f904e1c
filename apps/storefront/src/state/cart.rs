//! # Cart Session State
//!
//! One [`Cart`] per shopper session, held in a single registry.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several sessions may be served at once
//! 2. Each add/remove is a read-modify-write that must not interleave
//! 3. Carts are tiny, so one lock for all sessions is enough
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Shopper Action           Command                 Registry Change       │
//! │  ──────────────           ───────                 ───────────────       │
//! │                                                                         │
//! │  Open storefront ────────► open_cart() ─────────► insert(uuid, empty)  │
//! │                                                                         │
//! │  Add 3 to Cart ──────────► add_to_cart() ───────► cart.add(id, 3)      │
//! │                                                                         │
//! │  Remove (n) ─────────────► remove_from_cart() ──► cart.remove(id, 1)   │
//! │                                                                         │
//! │  View cart badge ────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  Leave ──────────────────► close_cart() ────────► remove(uuid)         │
//! │                                                                         │
//! │  NOTE: All operations take the Mutex; writes also touch updated_at.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tapshop_core::Cart;
use uuid::Uuid;

/// A shopper's cart plus bookkeeping.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub cart: Cart,

    /// When the session was opened
    pub created_at: DateTime<Utc>,

    /// Last time the cart was modified
    pub updated_at: DateTime<Utc>,
}

impl CartSession {
    fn new() -> Self {
        let now = Utc::now();
        CartSession {
            cart: Cart::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registry of open cart sessions.
///
/// ## Why Not RwLock?
/// Most operations modify a cart, and every critical section is a handful
/// of map operations.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    sessions: Arc<Mutex<HashMap<Uuid, CartSession>>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, CartSession>> {
        // Every write leaves the map consistent, so a poisoned lock is still usable
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens a session with an empty cart.
    pub fn open_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, CartSession::new());
        id
    }

    /// Runs `f` with read access to a session. `None` if it does not exist.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = carts.with_session(id, |s| s.cart.total_count());
    /// ```
    pub fn with_session<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&CartSession) -> R,
    {
        self.lock().get(&id).map(f)
    }

    /// Runs `f` with write access to a session's cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// carts.with_cart_mut(id, |cart| cart.add("nfc-pro-business-1", 2));
    /// ```
    pub fn with_cart_mut<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id)?;
        let result = f(&mut session.cart);
        session.updated_at = Utc::now();
        Some(result)
    }

    /// Closes a session. Returns the final cart if it existed.
    pub fn close_session(&self, id: Uuid) -> Option<Cart> {
        self.lock().remove(&id).map(|session| session.cart)
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_sessions_are_isolated() {
        let carts = CartState::new();
        let first = carts.open_session();
        let second = carts.open_session();

        carts.with_cart_mut(first, |cart| cart.add("metal", 2)).unwrap();

        assert_eq!(carts.with_session(first, |s| s.cart.quantity_of("metal")), Some(2));
        assert_eq!(carts.with_session(second, |s| s.cart.quantity_of("metal")), Some(0));
        assert_eq!(carts.session_count(), 2);
    }

    #[test]
    fn test_unknown_session() {
        let carts = CartState::new();
        let id = Uuid::new_v4();
        assert!(carts.with_session(id, |s| s.cart.total_count()).is_none());
        assert!(carts.with_cart_mut(id, |cart| cart.add("metal", 1)).is_none());
        assert!(carts.close_session(id).is_none());
    }

    #[test]
    fn test_write_touches_updated_at() {
        let carts = CartState::new();
        let id = carts.open_session();
        let created = carts.with_session(id, |s| s.updated_at).unwrap();

        carts.with_cart_mut(id, |cart| cart.add("metal", 1)).unwrap();
        let updated = carts.with_session(id, |s| s.updated_at).unwrap();
        assert!(updated >= created);
    }

    #[test]
    fn test_close_returns_cart() {
        let carts = CartState::new();
        let id = carts.open_session();
        carts.with_cart_mut(id, |cart| cart.add("metal", 3)).unwrap();

        let cart = carts.close_session(id).unwrap();
        assert_eq!(cart.total_count(), 3);
        assert_eq!(carts.session_count(), 0);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let carts = CartState::new();
        let id = carts.open_session();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let carts = carts.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        carts.with_cart_mut(id, |cart| cart.add("metal", 1)).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(carts.with_session(id, |s| s.cart.quantity_of("metal")), Some(800));
    }
}
