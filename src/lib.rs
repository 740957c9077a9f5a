//! Ordering and filtering engine for US city population records.
//!
//! The [`engine`] module holds the four in-place sorts and the query dispatch,
//! [`filter`] the case-insensitive lookups, and [`loader`] the dataset reader.
//! The binary in `main.rs` drives them through [`cli`].

pub mod cli;
pub mod engine;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
mod output;
mod session;
pub mod storage;
mod text_summary;
