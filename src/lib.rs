//! Conveyor: translation workflow tracking.
//!
//! This crate models translation records moving through a role-gated status
//! lifecycle: translators claim queued records and submit translations, QA
//! reviewers check the results and either approve them or send them back to
//! the queue.
//!
//! # Architecture
//!
//! Conveyor follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`translation`]: Translation records, the status state machine, and the
//!   update workflow

pub mod translation;
