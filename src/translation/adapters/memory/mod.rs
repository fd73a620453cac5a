//! In-memory adapters for translation persistence.

mod translation;

pub use translation::InMemoryTranslationRepository;
