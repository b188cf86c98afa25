//! Parameter extraction and coercion.
//!
//! Walks the matched handler's bindings in declared order and derives each
//! argument value from the request path or query string. Extraction is
//! all-or-nothing: the first failing binding aborts the whole resolution.

use super::core::{ArgVec, ParamValue};
use crate::error::RouterError;
use crate::resource::{BindingKind, ParamBinding, ParamTarget};
use crate::router::CompiledRoute;

pub(crate) fn extract_params(
    route: &CompiledRoute,
    path: &str,
    query: &str,
) -> Result<ArgVec, RouterError> {
    let mut args = ArgVec::new();

    for binding in &route.handler.params {
        match binding.kind {
            BindingKind::Path => {
                // A template that never mentions the key contributes nothing.
                if let Some(raw) = capture_path_value(route, &binding.key, path) {
                    args.push((binding.key.clone(), coerce(raw, binding)?));
                }
            }
            BindingKind::Query => {
                args.push((binding.key.clone(), query_value(query, binding)?));
            }
        }
    }

    Ok(args)
}

/// Run the route's precompiled capture pattern for `key` against the concrete
/// request path; the first capture group is the raw value.
fn capture_path_value<'a>(route: &CompiledRoute, key: &str, path: &'a str) -> Option<&'a str> {
    let pattern = route.capture_pattern(key)?;
    pattern.captures(path)?.get(1).map(|m| m.as_str())
}

/// Derive one query-bound value from the raw query string.
fn query_value(query: &str, binding: &ParamBinding) -> Result<ParamValue, RouterError> {
    let key = binding.key.as_str();
    let tokens: Vec<&str> = query
        .split('&')
        .filter(|token| token_key(token) == key)
        .collect();

    if tokens.is_empty() {
        return Err(RouterError::QueryParameterMissing {
            key: key.to_string(),
        });
    }

    if binding.target == ParamTarget::StrList {
        // Every occurrence contributes, empty values are skipped, encounter
        // order is preserved. An empty final list is not an error.
        let values = tokens
            .iter()
            .filter_map(|token| token.split_once('='))
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(ParamValue::List(values));
    }

    let value = tokens[0]
        .split_once('=')
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RouterError::QueryParameterEmpty {
            key: key.to_string(),
        })?;

    coerce(value, binding)
}

/// The key portion of one `key=value` query token (the whole token when no
/// separator is present).
fn token_key(token: &str) -> &str {
    token.split_once('=').map_or(token, |(key, _)| key)
}

/// Coerce a raw string value into the binding's target type family.
fn coerce(raw: &str, binding: &ParamBinding) -> Result<ParamValue, RouterError> {
    let fail = || RouterError::ParameterCoercionFailed {
        key: binding.key.clone(),
        value: raw.to_string(),
        target: binding.target,
    };

    match binding.target {
        ParamTarget::Int => raw.parse::<i32>().map(ParamValue::Int).map_err(|_| fail()),
        ParamTarget::Long => raw.parse::<i64>().map(ParamValue::Long).map_err(|_| fail()),
        ParamTarget::Str => Ok(ParamValue::Str(raw.to_string())),
        ParamTarget::StrList => Ok(ParamValue::List(vec![raw.to_string()])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_key_with_and_without_separator() {
        assert_eq!(token_key("start=1"), "start");
        assert_eq!(token_key("start="), "start");
        assert_eq!(token_key("start"), "start");
    }

    #[test]
    fn test_query_key_match_is_exact() {
        // `xsize=1` must not satisfy a binding for `size`.
        let binding = ParamBinding::query("size", ParamTarget::Int);
        let err = query_value("xsize=1", &binding).unwrap_err();
        assert!(matches!(err, RouterError::QueryParameterMissing { ref key } if key == "size"));
    }

    #[test]
    fn test_coerce_int_and_long() {
        let int = ParamBinding::query("n", ParamTarget::Int);
        assert_eq!(coerce("42", &int).unwrap(), ParamValue::Int(42));

        let long = ParamBinding::path("id", ParamTarget::Long);
        assert_eq!(coerce("9", &long).unwrap(), ParamValue::Long(9));

        let err = coerce("abc", &long).unwrap_err();
        assert!(matches!(
            err,
            RouterError::ParameterCoercionFailed { ref key, ref value, target }
                if key == "id" && value == "abc" && target == ParamTarget::Long
        ));
    }

    #[test]
    fn test_list_skips_empty_values() {
        let binding = ParamBinding::query("status", ParamTarget::StrList);
        let value = query_value("status=active&status=&status=init", &binding).unwrap();
        assert_eq!(
            value,
            ParamValue::List(vec!["active".to_string(), "init".to_string()])
        );
    }

    #[test]
    fn test_list_may_end_up_empty() {
        let binding = ParamBinding::query("status", ParamTarget::StrList);
        let value = query_value("status=", &binding).unwrap();
        assert_eq!(value, ParamValue::List(Vec::new()));
    }
}
