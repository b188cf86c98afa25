use crate::resource::HandlerDesc;
use http::Method;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Fully-qualified identity of one route-table entry: verb, produced
/// media-type token, and path template.
///
/// A handler producing N media types is registered under N distinct keys
/// sharing the same verb and template. `media_type: None` is the
/// wildcard-equivalent key registered for handlers that declare no produced
/// media types. `verb: None` marks a locator entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub verb: Option<Method>,
    pub media_type: Option<String>,
    pub template: String,
}

impl RouteKey {
    pub fn new(verb: Option<Method>, media_type: Option<String>, template: impl Into<String>) -> Self {
        Self {
            verb,
            media_type,
            template: template.into(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verb {
            Some(verb) => write!(f, "{verb}:")?,
            None => write!(f, "*:")?,
        }
        match &self.media_type {
            Some(media) => write!(f, "{media}:")?,
            None => write!(f, "*/*:")?,
        }
        f.write_str(&self.template)
    }
}

/// Flat mapping from [`RouteKey`] to handler descriptor.
///
/// Entries are kept in insertion order so that locator resolution and
/// matching tie-breaks are deterministic: they follow declaration order, not
/// the iteration order of a hash map. The table is only mutated by the
/// builder; once returned from `build` it is read-only.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    entries: Vec<(RouteKey, Arc<HandlerDesc>)>,
}

impl RouteTable {
    /// Insert an entry, replacing any existing entry under the same key.
    ///
    /// Last write wins on collision. Colliding keys are a registration
    /// mistake, so the replacement is logged.
    pub(crate) fn insert(&mut self, key: RouteKey, handler: Arc<HandlerDesc>) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            warn!(
                key = %key,
                replaced_handler = %self.entries[pos].1.handler_name,
                new_handler = %handler.handler_name,
                "route key collision, last write wins"
            );
            self.entries.remove(pos);
        }
        self.entries.push((key, handler));
    }

    /// Remove the entry under `key`, returning its handler if present.
    pub(crate) fn remove(&mut self, key: &RouteKey) -> Option<Arc<HandlerDesc>> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    #[must_use]
    pub fn get(&self, key: &RouteKey) -> Option<&Arc<HandlerDesc>> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, h)| h)
    }

    #[must_use]
    pub fn contains_key(&self, key: &RouteKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Whether any entry's template equals `template`, regardless of verb and
    /// media type.
    #[must_use]
    pub fn contains_template(&self, template: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.template == template)
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(RouteKey, Arc<HandlerDesc>)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
