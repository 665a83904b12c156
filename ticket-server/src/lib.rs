//! Travel ticket board server.
//!
//! Fetches travel tickets from a remote source and serves a filterable,
//! price-sorted list with stop-count filtering and currency display
//! conversion.

pub mod board;
pub mod currency;
pub mod datefmt;
pub mod domain;
pub mod filter;
pub mod pipeline;
pub mod source;
pub mod web;
