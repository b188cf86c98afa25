//! # Dispatcher Module
//!
//! The resolve facade: one call turns a request's verb, path, accept tokens,
//! and query string into a [`DispatchResult`], the handler identity plus the
//! bound argument values in declared parameter order.
//!
//! The dispatcher never constructs or invokes a handler; that machinery
//! belongs to the caller. It owns the frozen route table and its compiled
//! matcher, and is safe to share across threads once built.

mod core;
mod params;

pub use core::{ArgVec, DispatchResult, Dispatcher, ParamValue, MAX_INLINE_ARGS};
