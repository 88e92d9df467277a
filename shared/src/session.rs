//! Session-scoped fruit selection.
//!
//! The choice survives reloads within one browser tab but nothing longer. The
//! backing store is abstracted so the same logic runs against tab storage in a
//! page and against [`MemoryStorage`] in tools and tests.

use crate::catalog::{self, FRUITS, Fruit};
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Storage key holding the selected fruit id
pub const FRUIT_SESSION_KEY: &str = "ar_fruit_session";

/// Error type for selection operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("fruit catalog is empty")]
    EmptyCatalog,

    #[error("unknown fruit id: {0}")]
    UnknownFruit(String),

    #[error("session storage rejected write: {0}")]
    Storage(String),
}

/// Key-value persistence scoped to one session
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

/// In-process session storage
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Selection state for one session
pub struct FruitSession<S: SessionStorage> {
    storage: S,
    catalog: &'static [Fruit],
}

impl<S: SessionStorage> FruitSession<S> {
    /// Session over the built-in catalog
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            catalog: FRUITS,
        }
    }

    /// Session over a custom catalog
    pub fn with_catalog(storage: S, catalog: &'static [Fruit]) -> Result<Self, SessionError> {
        if catalog.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        Ok(Self { storage, catalog })
    }

    /// Fruit currently stored for this session, if it still exists
    pub fn current(&self) -> Option<&'static Fruit> {
        let id = self.storage.get_item(FRUIT_SESSION_KEY)?;
        catalog::find(self.catalog, &id)
    }

    /// Stored fruit, or a random one that is then stored.
    ///
    /// A stored id missing from the catalog is treated as no selection.
    pub fn get_or_init_selection<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&'static Fruit, SessionError> {
        if let Some(fruit) = self.current() {
            return Ok(fruit);
        }

        let fruit = catalog::random(self.catalog, rng).ok_or(SessionError::EmptyCatalog)?;
        debug!(fruit = fruit.id, "initialising session selection");
        self.storage.set_item(FRUIT_SESSION_KEY, fruit.id)?;
        Ok(fruit)
    }

    /// Store `id` as the selection
    pub fn set_selection(&mut self, id: &str) -> Result<&'static Fruit, SessionError> {
        let fruit = catalog::find(self.catalog, id)
            .ok_or_else(|| SessionError::UnknownFruit(id.to_string()))?;
        self.storage.set_item(FRUIT_SESSION_KEY, fruit.id)?;
        Ok(fruit)
    }

    /// Pick and store a fruit other than the current one.
    ///
    /// With a single-entry catalog the same fruit comes back.
    pub fn next_selection<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&'static Fruit, SessionError> {
        let current = self.storage.get_item(FRUIT_SESSION_KEY);
        let candidates: Vec<&'static Fruit> = self
            .catalog
            .iter()
            .filter(|fruit| Some(fruit.id) != current.as_deref())
            .collect();

        let fruit = if candidates.is_empty() {
            catalog::random(self.catalog, rng).ok_or(SessionError::EmptyCatalog)?
        } else {
            candidates[rng.random_range(0..candidates.len())]
        };

        debug!(from = ?current, to = fruit.id, "switching session selection");
        self.storage.set_item(FRUIT_SESSION_KEY, fruit.id)?;
        Ok(fruit)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    static SINGLE: &[Fruit] = &[Fruit {
        id: "lime",
        name: "Lime",
        emoji: "🍋",
        description: "Sour",
        model: "assets/models/lime.glb",
        color: "#c4e538",
        model_color: [0.5, 0.8, 0.2],
    }];

    #[test]
    fn first_call_initialises_and_persists() {
        let mut rng = Pcg64::seed_from_u64(1);
        let mut session = FruitSession::new(MemoryStorage::new());

        let first = session.get_or_init_selection(&mut rng).unwrap();
        assert_eq!(
            session.storage().get_item(FRUIT_SESSION_KEY).as_deref(),
            Some(first.id)
        );

        for _ in 0..10 {
            assert_eq!(session.get_or_init_selection(&mut rng).unwrap().id, first.id);
        }
    }

    #[test]
    fn stored_selection_survives_new_session() {
        let mut storage = MemoryStorage::new();
        storage.set_item(FRUIT_SESSION_KEY, "mango").unwrap();

        let mut session = FruitSession::new(storage);
        let mut rng = Pcg64::seed_from_u64(2);
        assert_eq!(session.get_or_init_selection(&mut rng).unwrap().id, "mango");
    }

    #[test]
    fn unknown_stored_id_is_replaced() {
        let mut storage = MemoryStorage::new();
        storage.set_item(FRUIT_SESSION_KEY, "durian").unwrap();

        let mut session = FruitSession::new(storage);
        let mut rng = Pcg64::seed_from_u64(3);
        let fruit = session.get_or_init_selection(&mut rng).unwrap();
        assert_ne!(fruit.id, "durian");
        assert_eq!(session.current().map(|f| f.id), Some(fruit.id));
    }

    #[test]
    fn set_selection_validates_id() {
        let mut session = FruitSession::new(MemoryStorage::new());
        assert_eq!(session.set_selection("pear").unwrap().name, "Pear");
        assert!(matches!(
            session.set_selection("durian"),
            Err(SessionError::UnknownFruit(_))
        ));
        assert_eq!(session.current().map(|f| f.id), Some("pear"));
    }

    #[test]
    fn next_selection_never_repeats() {
        let mut rng = Pcg64::seed_from_u64(4);
        let mut session = FruitSession::new(MemoryStorage::new());
        let mut previous = session.get_or_init_selection(&mut rng).unwrap().id;

        for _ in 0..100 {
            let next = session.next_selection(&mut rng).unwrap().id;
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn single_fruit_catalog_repeats() {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut session = FruitSession::with_catalog(MemoryStorage::new(), SINGLE).unwrap();
        let first = session.get_or_init_selection(&mut rng).unwrap().id;
        assert_eq!(session.next_selection(&mut rng).unwrap().id, first);
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(
            FruitSession::with_catalog(MemoryStorage::new(), &[]),
            Err(SessionError::EmptyCatalog)
        ));
    }
}
