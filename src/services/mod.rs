//! Service layer for Libris
//!
//! The service layer provides business logic on top of the stores,
//! handling validation and the borrow/return transitions.

pub mod catalog;
pub mod circulation;
pub mod roster;

pub use catalog::CatalogService;
pub use circulation::{CirculationService, ResolvedRecord};
pub use roster::RosterService;
