//! The member store.
//!
//! A [`MemberStore`] owns the authoritative sequence of members and the id
//! counter behind a single `RwLock`. Mutations take the write lock, so they
//! are serialized; [`MemberStore::snapshot`] copies the sequence under the
//! read lock and never observes a half-applied mutation.

use crate::member::{Member, MemberFields};
use crate::storage::seed::{read_seed_file, SeedError};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("member {0} not found")]
    NotFound(u64),
}

/// Internal data for the store, protected by a `RwLock`.
#[derive(Debug)]
pub struct StoreData {
    /// Members in insertion order. Entries are shared with snapshots and
    /// copied on write.
    pub members: Vec<Arc<Member>>,
    /// Id handed to the next created member. Only ever grows.
    next_id: u64,
}

impl StoreData {
    fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    fn assign_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// A thread-safe in-memory member collection.
///
/// Cloning a `MemberStore` produces a new handle to the same shared data.
#[derive(Debug, Clone)]
pub struct MemberStore {
    pub data: Arc<RwLock<StoreData>>,
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberStore {
    /// Creates an empty store whose first created member gets id 1.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::new())),
        }
    }

    /// Creates a store pre-loaded with `records`.
    pub fn with_members(records: Vec<Member>) -> Self {
        let store = Self::new();
        store.load_initial(records);
        store
    }

    /// Replaces the collection with `records`, keeping their ids.
    ///
    /// The id counter moves past the largest loaded id so created members
    /// never collide with seeded ones. It is never lowered.
    pub fn load_initial(&self, records: Vec<Member>) {
        let mut data = self.data.write();
        if let Some(max_id) = records.iter().map(|m| m.id).max() {
            data.next_id = data.next_id.max(max_id.saturating_add(1));
        }
        data.members = records.into_iter().map(Arc::new).collect();
    }

    /// Loads the seed file at `path` into the store.
    ///
    /// On failure the error is logged and returned, and the collection is
    /// left untouched. Callers at startup treat this as non-fatal.
    pub fn load_seed_file(&self, path: &Path) -> Result<usize, SeedError> {
        match read_seed_file(path) {
            Ok(records) => {
                let count = records.len();
                self.load_initial(records);
                tracing::info!(path = ?path, count, "Loaded seed members");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Could not load seed members: {}", e);
                Err(e)
            }
        }
    }

    /// Appends a new member with the next unused id and returns it.
    pub fn create(&self, fields: MemberFields) -> Member {
        let mut data = self.data.write();
        let id = data.assign_id();
        let member = Member::from_fields(id, fields);
        data.members.push(Arc::new(member.clone()));
        member
    }

    /// Returns the member with `id`.
    pub fn get_by_id(&self, id: u64) -> Result<Member, StoreError> {
        let data = self.data.read();
        data.members
            .iter()
            .find(|m| m.id == id)
            .map(|m| Member::clone(m))
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces every field of member `id` except the id itself.
    pub fn update(&self, id: u64, fields: MemberFields) -> Result<Member, StoreError> {
        let mut data = self.data.write();
        let idx = data.position(id).ok_or(StoreError::NotFound(id))?;
        let member = Arc::make_mut(&mut data.members[idx]);
        member.replace_fields(fields);
        Ok(member.clone())
    }

    /// Removes member `id` and returns it.
    pub fn delete_by_id(&self, id: u64) -> Result<Member, StoreError> {
        let mut data = self.data.write();
        let idx = data.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = data.members.remove(idx);
        Ok(Arc::unwrap_or_clone(removed))
    }

    /// Returns the current members in insertion order.
    ///
    /// Later mutations do not affect a snapshot already taken.
    pub fn snapshot(&self) -> Vec<Arc<Member>> {
        self.data.read().members.clone()
    }

    /// Number of members currently stored.
    pub fn len(&self) -> usize {
        self.data.read().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.data.read().next_id
    }
}
