//! Memoized module closure resolution.

use std::sync::Arc;

use crate::dependency::DependencyType;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::module::{Closure, Module};

use super::Registry;

/// Closures currently being computed, outermost first.
type ResolutionPath<'a> = Vec<(&'a str, DependencyType)>;

impl Registry {
    /// Every dependency `module` needs for `ty`, with edge attributes preserved.
    ///
    /// Each direct edge is included. A `recursive` edge to another module also
    /// pulls in that module's MAIN closure, or its `TestUnit` closure when the
    /// edge is flagged `test`. When the same target is reached more than once,
    /// the first edge in depth-first declaration order is kept.
    ///
    /// Results are cached on the module, so repeated calls are cheap.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownModule`] if `module` is not registered.
    /// - [`GraphError::UnresolvedDependency`] if a recursive edge names a
    ///   module the registry does not know.
    /// - [`GraphError::CircularModuleDependency`] if recursive edges lead back
    ///   to a closure that is still being computed.
    pub fn closure(&self, module: &str, ty: DependencyType) -> Result<Arc<Closure>> {
        let module = self.module(module)?;
        let mut path = ResolutionPath::new();
        self.resolve_closure(module, ty, &mut path)
    }

    fn resolve_closure<'a>(
        &'a self,
        module: &'a Module,
        ty: DependencyType,
        path: &mut ResolutionPath<'a>,
    ) -> Result<Arc<Closure>> {
        if let Some(cached) = module.cached_closure(ty) {
            tracing::trace!("Closure cache hit: {} {}", module.code_name_base(), ty);
            return Ok(cached);
        }

        path.push((module.code_name_base(), ty));
        let computed = self.compute_closure(module, ty, path);
        path.pop();

        let closure = computed?;
        tracing::debug!(
            "Resolved {} {} closure: {} dependencies",
            module.code_name_base(),
            ty,
            closure.len()
        );
        Ok(module.store_closure(ty, closure))
    }

    fn compute_closure<'a>(
        &'a self,
        module: &'a Module,
        ty: DependencyType,
        path: &mut ResolutionPath<'a>,
    ) -> Result<Closure> {
        let mut closure = Closure::new();
        let Some(direct) = module.direct_dependencies(ty, &self.inner.options.unit_test_configuration)
        else {
            return Ok(closure);
        };

        for dependency in direct {
            closure.insert(dependency.clone());

            if !dependency.recursive || dependency.target() == module.code_name_base() {
                continue;
            }

            let target = self
                .resolve_module(dependency.target())
                .ok_or_else(|| GraphError::unresolved(dependency.target(), module.code_name_base()))?;
            let target_ty = dependency.target_type();

            if path
                .iter()
                .any(|&(name, t)| name == target.code_name_base() && t == target_ty)
            {
                return Err(GraphError::circular_module(
                    target.code_name_base(),
                    module.code_name_base(),
                    render_path(path, target.code_name_base()),
                ));
            }

            tracing::trace!(
                "Expanding recursive dependency {} -> {} ({})",
                module.code_name_base(),
                target.code_name_base(),
                target_ty
            );
            let nested = self.resolve_closure(target, target_ty, path)?;
            closure.extend(nested.iter().cloned());
        }

        Ok(closure)
    }
}

pub(super) fn render_path(path: &[(&str, DependencyType)], closing: &str) -> String {
    let mut rendered: Vec<&str> = path.iter().map(|&(name, _)| name).collect();
    rendered.push(closing);
    rendered.join(" -> ")
}
