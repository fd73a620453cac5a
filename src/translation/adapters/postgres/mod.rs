//! `PostgreSQL` adapters for translation persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTranslationRepository, TranslationPgPool};
