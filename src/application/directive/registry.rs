use std::{collections::HashMap, fmt, sync::Arc};

use crate::domain::nodes::PaginationFragment;

use super::{
    Directive, DirectiveError, DirectiveInvocation, JCM_PAGINATION_DIRECTIVE, PaginationDirective,
};

/// Lookup table from directive name to implementation.
#[derive(Clone, Default)]
pub struct DirectiveRegistry {
    directives: HashMap<&'static str, Arc<dyn Directive>>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every directive shipped with the crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        register(&mut registry);
        registry
    }

    /// Insert a directive under its declared name, returning any directive it replaced.
    pub fn insert(&mut self, directive: Arc<dyn Directive>) -> Option<Arc<dyn Directive>> {
        self.directives.insert(directive.spec().name, directive)
    }

    /// Insert a directive under an additional name.
    pub fn insert_as(
        &mut self,
        name: &'static str,
        directive: Arc<dyn Directive>,
    ) -> Option<Arc<dyn Directive>> {
        self.directives.insert(name, directive)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Directive>> {
        self.directives.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.directives.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Validate and run the directive registered as `name`.
    ///
    /// Returns `Ok(None)` when no directive carries that name.
    pub fn run(
        &self,
        name: &str,
        invocation: &DirectiveInvocation,
    ) -> Result<Option<Vec<PaginationFragment>>, DirectiveError> {
        let Some(directive) = self.get(name) else {
            return Ok(None);
        };
        directive.spec().validate(invocation)?;
        directive.run(invocation).map(Some)
    }
}

impl fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectiveRegistry")
            .field("directives", &self.names())
            .finish()
    }
}

/// Register the pagination directive under `pagination` and `jcm-pagination`.
/// Call once while assembling a pipeline.
pub fn register(registry: &mut DirectiveRegistry) {
    let directive: Arc<dyn Directive> = Arc::new(PaginationDirective);
    registry.insert(Arc::clone(&directive));
    registry.insert_as(JCM_PAGINATION_DIRECTIVE, directive);
}
