//! Contract invariants test suite
//!
//! Workspace-level integration tests over the public `urlstate` surface.
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test contract
//!
//! # Run only the round-trip invariants
//! cargo test --test contract roundtrip
//!
//! # Run the property-based fuzzing
//! cargo test --test contract fuzz
//! ```


mod tolerant_parsing;

// Live accessor + link builder
mod live_link;

// Property-based fuzzing
mod fuzz;
