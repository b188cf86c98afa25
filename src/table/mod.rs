//! # Route Table Module
//!
//! Builds the flat, queryable route table out of declarative resource
//! descriptors.
//!
//! ## Overview
//!
//! The table builder is responsible for:
//! - Composing fully-qualified route keys (verb, media type, path template)
//!   for every handler declared on a resource
//! - Resolving sub-resource locators and folding base-path-less resources
//!   under their parent locator's template
//! - Enforcing key uniqueness (last write wins on collision)
//!
//! Table construction is a one-time, single-threaded startup step. The
//! returned [`RouteTable`] is read-only; the matcher compiles its patterns
//! once and serves arbitrarily many concurrent resolutions from them.

mod build;
mod types;

pub use build::RouteTableBuilder;
pub use types::{RouteKey, RouteTable};
