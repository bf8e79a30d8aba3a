use super::Router;

use crate::bind::{Kind, Record, Registry};
use crate::error::RouteError;

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::with_registry(Registry::builtin())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            routes: Vec::new(),
        }
    }

    /// Registers a route. The template's placeholder count must equal
    /// `shape.len()`; each captured segment is parsed into the field of
    /// the corresponding position.
    ///
    /// # Panics
    /// Panics on an invalid template, a placeholder/field count mismatch,
    /// or a field kind missing from the registry. See [`Router::try_route`].
    pub fn route(&mut self, template: &str, shape: &[Kind], data: T) -> &mut Self {
        if let Err(e) = self.register_endpoint(template, shape, data.into()) {
            panic!("{}: template = {:?}", e, template);
        }
        self
    }

    pub fn try_route(
        &mut self,
        template: &str,
        shape: &[Kind],
        data: T,
    ) -> Result<&mut Self, RouteError> {
        self.register_endpoint(template, shape, data.into())?;
        Ok(self)
    }

    /// Registers a child router under `prefix`. The child sees paths
    /// relative to the mount point and inherits the parent's registry.
    ///
    /// # Panics
    /// Panics if the prefix is not a valid placeholder-free template.
    pub fn mount(&mut self, prefix: &str, f: impl FnOnce(&mut Router<T>)) -> &mut Self {
        let mut child = Router::with_registry(self.registry.clone());
        f(&mut child);
        if let Err(e) = self.register_child(prefix, child) {
            panic!("{}: prefix = {:?}", e, prefix);
        }
        self
    }

    pub fn try_mount(
        &mut self,
        prefix: &str,
        f: impl FnOnce(&mut Router<T>),
    ) -> Result<&mut Self, RouteError> {
        let mut child = Router::with_registry(self.registry.clone());
        f(&mut child);
        self.register_child(prefix, child)?;
        Ok(self)
    }

    /// Matches `path` against the registered routes, trying the most
    /// recently registered first, and binds the captured segments.
    ///
    /// `None` means no route applies: either nothing matched, or every
    /// matching entry had a capture its field parser rejected.
    pub fn dispatch<'s>(&'s self, path: &str) -> Option<(&'s T, Record)> {
        self.dispatch_path(path)
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
