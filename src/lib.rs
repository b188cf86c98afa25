//! # resroute
//!
//! **resroute** is a declarative, resource-driven route-resolution engine: it
//! turns a set of resource descriptors into a flat route table, and turns one
//! HTTP-style request (verb, path, accept tokens, query string) into exactly
//! one resolved handler call (the handler identity plus its bound argument
//! values in declared parameter order) without ever executing the handler.
//!
//! ## Overview
//!
//! Resources are registered through explicit descriptor values, the same
//! information an annotation-scanned resource class would carry: a base path
//! and, per handler, an optional verb, an optional path suffix, produced
//! media types, ordered parameter bindings, and return-type metadata.
//! Handlers without a verb are *sub-resource locators*: at build time their
//! table entry is replaced by the handlers of the resource they delegate to,
//! mounted under the locator's path.
//!
//! ## Architecture
//!
//! The library is organized into a few key modules:
//!
//! - **[`resource`]** - declarative resource/handler/binding descriptors
//! - **[`table`]** - route-table building and sub-resource folding
//! - **[`router`]** - longest-template-first request matching with
//!   media-type tie-breaks over precompiled patterns
//! - **[`dispatcher`]** - the resolve facade and typed parameter extraction
//! - **[`error`]** - the engine's error taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use http::Method;
//! use resroute::{
//!     Dispatcher, HandlerDesc, ParamBinding, ParamTarget, ResourceDesc, RouteTableBuilder,
//! };
//!
//! # fn main() -> Result<(), resroute::RouterError> {
//! let projects = ResourceDesc::rooted("Project", "/projects").handler(
//!     HandlerDesc::operation("find_project_by_id", Method::GET)
//!         .path("{id}")
//!         .param(ParamBinding::path("id", ParamTarget::Long)),
//! );
//!
//! let table = RouteTableBuilder::new().resource(projects).build()?;
//! let dispatcher = Dispatcher::new(table);
//!
//! let result = dispatcher.resolve(Method::GET, "/projects/42", &[], "")?;
//! assert_eq!(result.handler_name, "find_project_by_id");
//! assert_eq!(result.get_arg("id").and_then(|v| v.as_long()), Some(42));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Table construction is a one-time, single-threaded startup step. The frozen
//! [`Dispatcher`] is read-only: resolution never mutates shared state, blocks,
//! or suspends, so it can be queried from any number of threads without
//! locking.

pub mod dispatcher;
pub mod error;
pub mod resource;
pub mod router;
pub mod table;

pub use dispatcher::{ArgVec, DispatchResult, Dispatcher, ParamValue};
pub use error::RouterError;
pub use resource::{
    BindingKind, HandlerDesc, ParamBinding, ParamTarget, ResourceDesc, ResourceType,
    ReturnTypeMeta, MEDIA_WILDCARD,
};
pub use router::{CompiledRoute, Router};
pub use table::{RouteKey, RouteTable, RouteTableBuilder};
