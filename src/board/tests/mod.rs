//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Hand-built positions: captures, chains, crowning, terminal values
//! - `search.rs` - Root move choice and cache behaviour
//! - `proptest.rs` - Property-based tests over random positions

mod search;
