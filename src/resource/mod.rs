//! Declarative resource descriptors.
//!
//! Resources and their handlers are registered through explicit descriptor
//! values rather than discovered by scanning annotations or attributes. A
//! [`ResourceDesc`] carries the same information an annotated resource class
//! would: base path, per-handler verb, path suffix, produced media types,
//! ordered parameter bindings, and return-type metadata for sub-resource
//! locators.

mod types;

pub use types::{
    BindingKind, HandlerDesc, ParamBinding, ParamTarget, ResourceDesc, ResourceType,
    ReturnTypeMeta, MEDIA_WILDCARD,
};
