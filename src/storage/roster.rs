//! Member roster store
//!
//! In-memory store for members keyed by member ID.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Member, MemberId};

/// Store for members, keyed by member ID
#[derive(Default)]
pub struct Roster {
    data: RwLock<HashMap<MemberId, Member>>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for the member's ID
    pub fn add_member(&self, member: Member) -> LibraryResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(member.id, member);
        Ok(())
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> LibraryResult<Option<Member>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all members, sorted by ID for stable listings
    pub fn get_all(&self) -> LibraryResult<Vec<Member>> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by_key(|m| m.id);
        Ok(members)
    }

    /// Count members in the roster
    pub fn count(&self) -> LibraryResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| LibraryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
