//! Entry repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryEntryRepository`] - Process-local maps guarded by one lock
//! - [`PgEntryRepository`] - PostgreSQL storage with a transactional counter

pub mod memory_entry_repository;
pub mod pg_entry_repository;

pub use memory_entry_repository::InMemoryEntryRepository;
pub use pg_entry_repository::PgEntryRepository;
