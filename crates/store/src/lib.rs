//! `recordworks-store` — generic keyed entity repository.
//!
//! One store implementation, in memory, exclusive single-threaded access.
//! Callers that share a repository across threads wrap it in their own lock.

pub mod repository;

pub use repository::Repository;
