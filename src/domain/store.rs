//! In-memory saying store

use crate::domain::WiseSaying;

/// Ordered collection of sayings plus the monotonic id counter.
///
/// Insertion order is the only display order. Ids are assigned as
/// `last_id + 1` and never reused, even after a deletion.
#[derive(Debug, Default)]
pub struct SayingStore {
    sayings: Vec<WiseSaying>,
    last_id: i64,
}

impl SayingStore {
    /// Create an empty store with the counter at zero.
    pub fn new() -> Self {
        SayingStore::default()
    }

    /// Rebuild a store from previously persisted state.
    pub fn restore(sayings: Vec<WiseSaying>, last_id: i64) -> Self {
        SayingStore { sayings, last_id }
    }

    pub fn last_id(&self) -> i64 {
        self.last_id
    }

    /// Register a new saying under the next id. Always succeeds.
    pub fn add(&mut self, content: &str, author: &str) -> WiseSaying {
        self.last_id += 1;
        let saying = WiseSaying::new(self.last_id, content.to_string(), author.to_string());
        self.sayings.push(saying.clone());
        saying
    }

    pub fn find_by_id(&self, id: i64) -> Option<&WiseSaying> {
        self.sayings.iter().find(|s| s.id == id)
    }

    /// Replace the saying's content and author, keeping its id and its
    /// position in the listing. `None` if no saying has the id.
    pub fn update(&mut self, id: i64, content: &str, author: &str) -> Option<WiseSaying> {
        let saying = self.sayings.iter_mut().find(|s| s.id == id)?;
        saying.content = content.to_string();
        saying.author = author.to_string();
        Some(saying.clone())
    }

    /// Remove the saying with the given id. The counter is never
    /// decremented. `None` if no saying has the id.
    pub fn remove(&mut self, id: i64) -> Option<WiseSaying> {
        let index = self.sayings.iter().position(|s| s.id == id)?;
        Some(self.sayings.remove(index))
    }

    /// All sayings in insertion order.
    pub fn list(&self) -> &[WiseSaying] {
        &self.sayings
    }
}
