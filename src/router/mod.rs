//! # Router Module
//!
//! Path matching and route resolution over a frozen route table.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at startup, every table key's template (e.g.
//!    `/projects/{id}`) is converted into a regex pattern that can match the
//!    request path, together with one capture pattern per path-bound
//!    parameter for the extractor.
//!
//! 2. **Matching**: for each incoming request, compiled patterns are tested
//!    longest-template-first until one matches, then the matched template's
//!    media-type variants are filtered against the request's accept tokens.
//!
//! Neither phase mutates shared state after compilation, so one router can
//! serve arbitrarily many concurrent resolutions without locking.

mod core;

pub use core::{CompiledRoute, Router};
