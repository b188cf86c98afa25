use crate::error::RouterError;
use crate::resource::HandlerDesc;
use crate::router::Router;
use crate::table::RouteTable;
use http::Method;
use serde::Serialize;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

use super::params::extract_params;

/// Maximum number of bound arguments before heap allocation.
/// Most handlers bind ≤4 parameters; the resolve hot path stays on the stack
/// for the common case.
pub const MAX_INLINE_ARGS: usize = 8;

/// Stack-allocated bound-argument storage for the resolve hot path.
pub type ArgVec = SmallVec<[(String, ParamValue); MAX_INLINE_ARGS]>;

/// A coerced parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i32),
    Long(i64),
    Str(String),
    List(Vec<String>),
}

impl ParamValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            ParamValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

/// The outcome of resolving one request: the handler to invoke and its bound
/// arguments.
///
/// `args` preserves the handler's declared parameter order end-to-end; the
/// caller is expected to pass the values positionally when it invokes the
/// handler. The handler itself is opaque to the engine: construction and
/// invocation belong to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    /// The matched descriptor; not part of the serialized diagnostic form.
    #[serde(skip_serializing)]
    pub handler: Arc<HandlerDesc>,
    /// Convenience copy of `handler.handler_name`.
    pub handler_name: String,
    /// Bound arguments, `(key, value)`, in declared parameter order.
    pub args: ArgVec,
}

impl DispatchResult {
    /// Get a bound argument by key.
    #[inline]
    #[must_use]
    pub fn get_arg(&self, key: &str) -> Option<&ParamValue> {
        self.args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Argument values in positional (declared) order.
    pub fn arg_values(&self) -> impl Iterator<Item = &ParamValue> {
        self.args.iter().map(|(_, v)| v)
    }
}

/// The route-resolution engine: a frozen route table plus its compiled
/// matcher.
///
/// Construction happens once at startup. After that the dispatcher is
/// read-only; `resolve` is a pure, synchronous computation over its inputs
/// and may be called from any number of threads concurrently.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: RouteTable,
    router: Router,
}

impl Dispatcher {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        let router = Router::new(&table);
        Self { table, router }
    }

    /// The frozen route table this dispatcher serves.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The compiled matcher.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Resolve one request to a handler and its bound arguments.
    ///
    /// `accept` is the ordered list of acceptable media-type tokens (empty
    /// defaults to the wildcard token); `query` is the raw query string and
    /// may be empty. No partial result is ever returned: extraction either
    /// fully succeeds or the whole resolution fails.
    ///
    /// # Errors
    ///
    /// Propagates matching errors ([`RouterError::RouteNotFound`],
    /// [`RouterError::MediaTypeNotAcceptable`]) and extraction errors
    /// ([`RouterError::QueryParameterMissing`],
    /// [`RouterError::QueryParameterEmpty`],
    /// [`RouterError::ParameterCoercionFailed`]).
    pub fn resolve(
        &self,
        method: Method,
        path: &str,
        accept: &[String],
        query: &str,
    ) -> Result<DispatchResult, RouterError> {
        let route = self.router.match_route(&method, path, accept)?;
        let args = extract_params(route, path, query)?;

        debug!(
            method = %method,
            path = %path,
            handler_name = %route.handler.handler_name,
            args_count = args.len(),
            "request resolved"
        );

        Ok(DispatchResult {
            handler_name: route.handler.handler_name.clone(),
            handler: Arc::clone(&route.handler),
            args,
        })
    }
}
