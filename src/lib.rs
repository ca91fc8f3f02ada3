//! Zen News - a news collector
//!
//! This crate fetches RSS/Atom feeds from a fixed set of sources, classifies and
//! ranks the entries, and writes a small deduplicated article snapshot plus an
//! artwork of the day as JSON documents for a static display layer.

pub mod art;
pub mod article;
pub mod classifier;
pub mod config;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod routes;
pub mod snapshot;
pub mod text;
