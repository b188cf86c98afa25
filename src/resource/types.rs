use http::Method;
use serde::Serialize;
use std::fmt;

/// Media-type token that matches any other token, on either side of a
/// produces/accept comparison.
pub const MEDIA_WILDCARD: &str = "*/*";

/// Identity tag for a resource type.
///
/// Sub-resource locators declare the resource type they route to as explicit
/// metadata; this tag is what the table builder compares when it mounts a
/// base-path-less resource under its parent locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceType(String);

impl ResourceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ResourceType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Path,
    Query,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Path => write!(f, "Path"),
            BindingKind::Query => write!(f, "Query"),
        }
    }
}

/// Type family a raw parameter value is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamTarget {
    Int,
    Long,
    Str,
    StrList,
}

impl fmt::Display for ParamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamTarget::Int => write!(f, "Int"),
            ParamTarget::Long => write!(f, "Long"),
            ParamTarget::Str => write!(f, "Str"),
            ParamTarget::StrList => write!(f, "StrList"),
        }
    }
}

/// Binding rule for one handler parameter: where the value comes from, the
/// external key it is read under, and the target coercion type.
#[derive(Debug, Clone)]
pub struct ParamBinding {
    pub kind: BindingKind,
    pub key: String,
    pub target: ParamTarget,
}

impl ParamBinding {
    pub fn path(key: impl Into<String>, target: ParamTarget) -> Self {
        Self {
            kind: BindingKind::Path,
            key: key.into(),
            target,
        }
    }

    pub fn query(key: impl Into<String>, target: ParamTarget) -> Self {
        Self {
            kind: BindingKind::Query,
            key: key.into(),
            target,
        }
    }
}

/// Return-type descriptor, consulted only while resolving sub-resource
/// locators.
///
/// `Dynamic` covers handlers whose concrete return type is only fixed at
/// runtime; the type it resolves to is still declared here as metadata, so
/// locator resolution never has to instantiate or invoke a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnTypeMeta {
    /// The handler returns the named resource type directly.
    Resource(ResourceType),
    /// The handler returns a type-parameterized wrapper naming the resource
    /// type as its argument.
    Wrapper(ResourceType),
    /// The handler's declared return type is dynamic; the named type is the
    /// concrete resource type it produces.
    Dynamic(ResourceType),
}

impl ReturnTypeMeta {
    /// Whether this descriptor names `resource_type` as its routing target.
    #[must_use]
    pub fn names(&self, resource_type: &ResourceType) -> bool {
        match self {
            ReturnTypeMeta::Resource(ty)
            | ReturnTypeMeta::Wrapper(ty)
            | ReturnTypeMeta::Dynamic(ty) => ty == resource_type,
        }
    }
}

/// One routable unit declared on a resource.
///
/// A handler with a verb is a terminal, request-servable operation. A handler
/// without a verb is a pure locator: it only delegates routing to another
/// resource's handlers and is never matched against a request itself.
#[derive(Debug, Clone)]
pub struct HandlerDesc {
    /// Opaque identity the caller uses to construct and invoke the handler.
    pub handler_name: String,
    pub verb: Option<Method>,
    /// Path suffix joined onto the owning resource's base path. `None` (or
    /// empty) means the handler lives at the base path itself.
    pub path: Option<String>,
    /// Produced media-type tokens. Empty means implicit wildcard.
    pub produces: Vec<String>,
    /// Parameter bindings in declared order. Order is load-bearing: the
    /// resolved argument values are passed to the handler positionally.
    pub params: Vec<ParamBinding>,
    /// Return-type metadata, used only during sub-resource resolution.
    pub returns: Option<ReturnTypeMeta>,
}

impl HandlerDesc {
    /// A request-servable operation.
    pub fn operation(handler_name: impl Into<String>, verb: Method) -> Self {
        Self {
            handler_name: handler_name.into(),
            verb: Some(verb),
            path: None,
            produces: Vec::new(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// A pure locator delegating to the resource named by `returns`.
    pub fn locator(handler_name: impl Into<String>, returns: ReturnTypeMeta) -> Self {
        Self {
            handler_name: handler_name.into(),
            verb: None,
            path: None,
            produces: Vec::new(),
            params: Vec::new(),
            returns: Some(returns),
        }
    }

    #[must_use]
    pub fn path(mut self, suffix: impl Into<String>) -> Self {
        self.path = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn produces(mut self, media_type: impl Into<String>) -> Self {
        self.produces.push(media_type.into());
        self
    }

    #[must_use]
    pub fn param(mut self, binding: ParamBinding) -> Self {
        self.params.push(binding);
        self
    }

    #[must_use]
    pub fn returns(mut self, meta: ReturnTypeMeta) -> Self {
        self.returns = Some(meta);
        self
    }

    #[must_use]
    pub fn is_locator(&self) -> bool {
        self.verb.is_none()
    }
}

/// A resource: its type tag, an optional base path, and the handlers declared
/// on it.
///
/// A resource without a base path is a pending sub-resource; the table builder
/// mounts it under the locator entry whose return type names it.
#[derive(Debug, Clone)]
pub struct ResourceDesc {
    pub resource_type: ResourceType,
    pub base_path: Option<String>,
    pub handlers: Vec<HandlerDesc>,
}

impl ResourceDesc {
    /// A resource mounted at a declared base path.
    pub fn rooted(resource_type: impl Into<ResourceType>, base_path: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            base_path: Some(base_path.into()),
            handlers: Vec::new(),
        }
    }

    /// A pending sub-resource, mounted later under a matching locator.
    pub fn pending(resource_type: impl Into<ResourceType>) -> Self {
        Self {
            resource_type: resource_type.into(),
            base_path: None,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn handler(mut self, handler: HandlerDesc) -> Self {
        self.handlers.push(handler);
        self
    }
}
