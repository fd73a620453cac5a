//! Adapter implementations of the translation ports.

pub mod memory;
pub mod postgres;
