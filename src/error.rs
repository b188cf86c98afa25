use crate::resource::{ParamTarget, ResourceType};
use http::Method;
use thiserror::Error;

/// Error taxonomy of the route-resolution engine.
///
/// `SubResourceLocatorNotFound` is build-time and fatal to startup; the rest
/// are request-time and reported synchronously to the caller of `resolve`.
/// Nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouterError {
    /// No existing locator entry's return type matches a base-path-less
    /// resource.
    #[error("no sub-resource locator found for resource type `{resource_type}`")]
    SubResourceLocatorNotFound { resource_type: ResourceType },

    /// No template matched the request's verb and path.
    #[error("no route matched {method} {path}")]
    RouteNotFound { method: Method, path: String },

    /// A template matched, but none of its produced media types is
    /// acceptable. Distinct from `RouteNotFound` so callers can answer with
    /// a 406-style rather than 404-style response.
    #[error("route matched for {path} but produces no acceptable media type")]
    MediaTypeNotAcceptable { path: String },

    /// A query-bound parameter has no token in the query string.
    #[error("missing query parameter `{key}`")]
    QueryParameterMissing { key: String },

    /// A query-bound parameter's first token has no value.
    #[error("query parameter `{key}` must not be empty")]
    QueryParameterEmpty { key: String },

    /// A raw value could not be converted to the declared type family.
    #[error("cannot coerce parameter `{key}` value `{value}` to {target}")]
    ParameterCoercionFailed {
        key: String,
        value: String,
        target: ParamTarget,
    },
}
