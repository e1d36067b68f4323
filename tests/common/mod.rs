//! Shared test utilities for psst integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders construct entries and indexes; fixtures hold
//! static rendered-page markup in the conventions the scanner expects.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
