//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//!
//! # Bounded Contexts
//!
//! - [`option_position`]: Single-contract option position lifecycle and P&L
//! - [`shared`]: Numeric policy types and identifiers used across contexts

pub mod option_position;
pub mod shared;
