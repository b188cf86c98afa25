use super::types::{RouteKey, RouteTable};
use crate::error::RouterError;
use crate::resource::{ResourceDesc, ResourceType};
use std::sync::Arc;
use tracing::{debug, info};

/// Folds a sequence of resource descriptors into a frozen [`RouteTable`].
///
/// Resources carrying a base path are mounted first, in declaration order.
/// Base-path-less resources are then mounted one by one: each is matched to
/// the locator entry whose return-type metadata names it, the locator entry
/// is removed, and the resource's own handlers are mounted under the
/// locator's template. Chained sub-resources resolve as long as each parent
/// is mounted before its child is processed.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    resources: Vec<ResourceDesc>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn resource(mut self, resource: ResourceDesc) -> Self {
        self.resources.push(resource);
        self
    }

    #[must_use]
    pub fn resources(mut self, resources: impl IntoIterator<Item = ResourceDesc>) -> Self {
        self.resources.extend(resources);
        self
    }

    /// Build the route table.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::SubResourceLocatorNotFound`] when a
    /// base-path-less resource has no matching locator entry in the table at
    /// the time it is processed.
    pub fn build(self) -> Result<RouteTable, RouterError> {
        let mut table = RouteTable::default();

        // Stable partition: rooted resources mount before pending
        // sub-resources regardless of registration order.
        let (rooted, pending): (Vec<_>, Vec<_>) = self
            .resources
            .into_iter()
            .partition(|r| r.base_path.is_some());

        for resource in &rooted {
            if let Some(base) = resource.base_path.as_deref() {
                mount(&mut table, resource, base);
            }
        }

        for resource in &pending {
            let locator_key = resolve_locator(&table, &resource.resource_type)?;
            debug!(
                resource_type = %resource.resource_type,
                locator = %locator_key,
                "folding sub-resource under locator"
            );
            let parent = locator_key.template.clone();
            table.remove(&locator_key);
            mount(&mut table, resource, &parent);
        }

        info!(routes_count = table.len(), "route table built");
        Ok(table)
    }
}

/// Find the locator entry a pending sub-resource mounts under.
///
/// A candidate is any entry whose handler carries no verb and whose
/// return-type metadata names `resource_type`. Entries are scanned in
/// declaration order and the first candidate wins, so ambiguity between
/// several qualifying locators resolves deterministically.
fn resolve_locator(
    table: &RouteTable,
    resource_type: &ResourceType,
) -> Result<RouteKey, RouterError> {
    table
        .entries()
        .iter()
        .find(|(_, handler)| {
            handler.verb.is_none()
                && handler
                    .returns
                    .as_ref()
                    .is_some_and(|meta| meta.names(resource_type))
        })
        .map(|(key, _)| key.clone())
        .ok_or_else(|| RouterError::SubResourceLocatorNotFound {
            resource_type: resource_type.clone(),
        })
}

fn mount(table: &mut RouteTable, resource: &ResourceDesc, base: &str) {
    for handler in &resource.handlers {
        let template = join_paths(base, handler.path.as_deref());
        let handler = Arc::new(handler.clone());
        if handler.produces.is_empty() {
            table.insert(
                RouteKey::new(handler.verb.clone(), None, template),
                handler,
            );
        } else {
            for media_type in &handler.produces {
                table.insert(
                    RouteKey::new(handler.verb.clone(), Some(media_type.clone()), template.clone()),
                    Arc::clone(&handler),
                );
            }
        }
    }
}

/// Join a base path and a handler suffix with exactly one `/` at the seam.
///
/// An absent or empty suffix contributes nothing. When both sides supply a
/// separator, one is dropped.
pub(crate) fn join_paths(base: &str, suffix: Option<&str>) -> String {
    let suffix = match suffix {
        None | Some("") => return base.to_string(),
        Some(s) => s,
    };
    match (base.ends_with('/'), suffix.starts_with('/')) {
        (true, true) => format!("{}{}", base, &suffix[1..]),
        (false, false) => format!("{base}/{suffix}"),
        _ => format!("{base}{suffix}"),
    }
}
