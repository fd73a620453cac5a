//! Translation lifecycle management for Conveyor.
//!
//! This module tracks translation records through their workflow: queued
//! records are claimed by translators, translated, handed to QA reviewers for
//! checking, and either approved or returned to the queue. Status changes are
//! validated against a role-gated edge set, and record updates carry the
//! assignment side effects of each transition. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
