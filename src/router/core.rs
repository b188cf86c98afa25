use crate::error::RouterError;
use crate::resource::{BindingKind, HandlerDesc, MEDIA_WILDCARD};
use crate::table::{RouteKey, RouteTable};
use http::Method;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One frozen table entry with its matching machinery precompiled.
///
/// Pattern construction cost is paid once per key at build time; matching a
/// request only runs the compiled regexes.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub key: RouteKey,
    pub handler: Arc<HandlerDesc>,
    /// Fully anchored pattern derived from the template: placeholders become
    /// `\w+`, literal segments stay literal.
    pattern: Regex,
    /// One capture pattern per path-bound parameter key, precompiled for the
    /// extractor.
    capture_patterns: Vec<(String, Regex)>,
}

impl CompiledRoute {
    /// Whether the route's template pattern matches `path`.
    #[inline]
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// The capture pattern for path parameter `key`, if the handler binds one.
    pub(crate) fn capture_pattern(&self, key: &str) -> Option<&Regex> {
        self.capture_patterns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, re)| re)
    }
}

/// Matches a request's verb, path, and acceptable media types to exactly one
/// route key.
///
/// Candidate keys are evaluated longest-template-first so that the most
/// specific template wins over a shorter template that happens to be a
/// structural prefix. The sort is stable, so same-length ties keep
/// declaration order. Entries without a verb (unfolded locators) are never
/// matched against a request.
#[derive(Debug, Clone)]
pub struct Router {
    /// Compiled routes, sorted longest-template-first.
    routes: Vec<CompiledRoute>,
}

impl Router {
    /// Compile a frozen route table into a matcher.
    #[must_use]
    pub fn new(table: &RouteTable) -> Self {
        let mut routes: Vec<CompiledRoute> = table
            .entries()
            .iter()
            .map(|(key, handler)| {
                let capture_patterns = handler
                    .params
                    .iter()
                    .filter(|p| p.kind == BindingKind::Path)
                    .map(|p| {
                        (
                            p.key.clone(),
                            template_pattern(&key.template, Some(p.key.as_str())),
                        )
                    })
                    .collect();
                CompiledRoute {
                    pattern: template_pattern(&key.template, None),
                    capture_patterns,
                    key: key.clone(),
                    handler: Arc::clone(handler),
                }
            })
            .collect();

        routes.sort_by(|a, b| b.key.template.len().cmp(&a.key.template.len()));

        info!(routes_count = routes.len(), "routing table compiled");
        Self { routes }
    }

    /// Match a request to a route.
    ///
    /// The first key (longest-template-first) whose verb equals the request
    /// verb and whose pattern matches the path fixes the route match. Among
    /// that template's media-type variants, an exact accept-token match is
    /// preferred over wildcard compatibility. An empty `accept` slice
    /// defaults to the wildcard token.
    ///
    /// # Errors
    ///
    /// * [`RouterError::RouteNotFound`] when no template/verb pair matches.
    /// * [`RouterError::MediaTypeNotAcceptable`] when a template matched but
    ///   none of its media-type variants intersects `accept`.
    pub fn match_route(
        &self,
        method: &Method,
        path: &str,
        accept: &[String],
    ) -> Result<&CompiledRoute, RouterError> {
        debug!(method = %method, path = %path, "route match attempt");

        let matched = self
            .routes
            .iter()
            .find(|r| r.key.verb.as_ref() == Some(method) && r.matches_path(path));

        let Some(matched) = matched else {
            warn!(method = %method, path = %path, "no route matched");
            return Err(RouterError::RouteNotFound {
                method: method.clone(),
                path: path.to_string(),
            });
        };

        let template = matched.key.template.as_str();
        let variants = || {
            self.routes
                .iter()
                .filter(|r| r.key.verb.as_ref() == Some(method) && r.key.template == template)
        };

        let selected = variants()
            .find(|r| accepts_exact(r.key.media_type.as_deref(), accept))
            .or_else(|| variants().find(|r| accepts(r.key.media_type.as_deref(), accept)));

        match selected {
            Some(route) => {
                debug!(
                    method = %method,
                    path = %path,
                    route_key = %route.key,
                    handler_name = %route.handler.handler_name,
                    "route matched"
                );
                Ok(route)
            }
            None => {
                warn!(
                    method = %method,
                    path = %path,
                    template = %template,
                    "no acceptable media type"
                );
                Err(RouterError::MediaTypeNotAcceptable {
                    path: path.to_string(),
                })
            }
        }
    }

    /// All compiled routes, longest template first.
    #[must_use]
    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }
}

/// Whether the produced token appears verbatim in the accept list.
///
/// A missing token means the handler declared no produced media types, which
/// is equivalent to producing the wildcard. An empty accept list defaults to
/// the wildcard token.
fn accepts_exact(produced: Option<&str>, accept: &[String]) -> bool {
    let produced = produced.unwrap_or(MEDIA_WILDCARD);
    if accept.is_empty() {
        return produced == MEDIA_WILDCARD;
    }
    accept.iter().any(|a| a == produced)
}

/// Whether the produced token is compatible with the accept list, treating
/// the wildcard on either side as a universal match.
fn accepts(produced: Option<&str>, accept: &[String]) -> bool {
    let produced = produced.unwrap_or(MEDIA_WILDCARD);
    produced == MEDIA_WILDCARD
        || accept.is_empty()
        || accept.iter().any(|a| a == MEDIA_WILDCARD || a == produced)
}

/// Compile a path template into a matching pattern.
///
/// Every `{name}` placeholder becomes `\w+` (one or more non-slash word
/// characters); literal spans are regex-escaped. When `capture` names a
/// placeholder, that placeholder becomes the pattern's single capture group.
/// The pattern is anchored at both ends, so a placeholder-free template
/// matches by exact literal equality.
pub(crate) fn template_pattern(template: &str, capture: Option<&str>) -> Regex {
    let mut pattern = String::with_capacity(template.len() + 8);
    pattern.push('^');
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        pattern.push_str(&regex::escape(literal));
        match tail[1..].find('}') {
            Some(close) => {
                let name = &tail[1..=close];
                if capture == Some(name) {
                    pattern.push_str(r"(\w+)");
                } else {
                    pattern.push_str(r"\w+");
                }
                rest = &tail[close + 2..];
            }
            None => {
                // Unterminated placeholder, treat the remainder as literal.
                pattern.push_str(&regex::escape(tail));
                rest = "";
            }
        }
    }
    pattern.push_str(&regex::escape(rest));
    pattern.push('$');

    // Literal spans are escaped above, so compilation cannot fail on user input.
    Regex::new(&pattern).expect("failed to compile route pattern")
}
