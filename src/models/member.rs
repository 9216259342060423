//! Member model
//!
//! A registered library member. Members are immutable after creation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A library member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Member name
    pub name: String,

    /// Unique roster key
    pub id: MemberId,
}

impl Member {
    /// Create a new member
    pub fn new(name: impl Into<String>, id: impl Into<MemberId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Validate the member
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(MemberValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for MemberValidationError {}
