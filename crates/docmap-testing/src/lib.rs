//! Testing infrastructure for docmap integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI command
//! - `fixtures`: sample cluster sets, points and documents
//! - `assertions`: checks on the JSON envelope printed with `--format json`
//! - `http`: one-shot loopback server for the HTTP source

pub mod assertions;
pub mod fixtures;
pub mod http;
pub mod world;

pub use world::TestWorld;
