//! Port contracts for translation workflow tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by translation
//! services.

pub mod repository;

pub use repository::{
    StatusCount, TranslationRepository, TranslationRepositoryError, TranslationRepositoryResult,
};
