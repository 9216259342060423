//! Roster service
//!
//! Validated member management over the roster store.

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Member, MemberId};
use crate::storage::Library;

/// Service for roster management
pub struct RosterService<'a> {
    library: &'a Library,
}

impl<'a> RosterService<'a> {
    /// Create a new roster service
    pub fn new(library: &'a Library) -> Self {
        Self { library }
    }

    /// Add a member to the roster. Re-adding an ID overwrites the entry.
    pub fn add(&self, name: &str, id: MemberId) -> LibraryResult<Member> {
        let member = Member::new(name.trim(), id);

        member
            .validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        self.library.roster.add_member(member.clone())?;
        Ok(member)
    }

    /// Find a member by ID
    pub fn find(&self, id: MemberId) -> LibraryResult<Option<Member>> {
        self.library.roster.get(id)
    }

    /// List all members
    pub fn list(&self) -> LibraryResult<Vec<Member>> {
        self.library.roster.get_all()
    }

    /// Count members
    pub fn count(&self) -> LibraryResult<usize> {
        self.library.roster.count()
    }
}
