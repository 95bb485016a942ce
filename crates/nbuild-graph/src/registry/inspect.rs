//! Human-readable dependency trees.

use crate::dependency::DependencyType;
use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::module::Module;

use super::Registry;
use super::closure::render_path;

impl Registry {
    /// Render the MAIN and `TestUnit` dependency trees of a module.
    ///
    /// Each section starts with `<cnb> <TYPE> dependencies:` and lists direct
    /// edges indented two spaces per level. Recursive edges are followed into
    /// the target's matching edge set:
    ///
    /// ```text
    /// org.example.app MAIN dependencies:
    ///   - org.example.api > 1.2 (r)
    ///     - org.openide.util/9 > 9.24
    /// ```
    ///
    /// # Errors
    ///
    /// Fails the same way [`closure`](Self::closure) does for unknown or
    /// looping recursive targets.
    pub fn inspect_dependencies(&self, module: &str) -> Result<String> {
        let module = self.module(module)?;
        let mut out = String::new();

        for ty in DependencyType::ALL {
            out.push_str(&format!("{} {} dependencies:\n", module.code_name_base(), ty));
            let mut path = Vec::new();
            self.write_tree(module, ty, 0, &mut path, &mut out)?;
            out.push('\n');
        }

        Ok(out)
    }

    fn write_tree<'a>(
        &'a self,
        module: &'a Module,
        ty: DependencyType,
        level: usize,
        path: &mut Vec<(&'a str, DependencyType)>,
        out: &mut String,
    ) -> Result<()> {
        let Some(direct) = module.direct_dependencies(ty, &self.inner.options.unit_test_configuration)
        else {
            return Ok(());
        };

        path.push((module.code_name_base(), ty));
        for dependency in direct {
            out.push_str(&"  ".repeat(level + 1));
            out.push_str(&format!("- {dependency}\n"));

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
            self.write_tree(target, target_ty, level + 1, path, out)?;
        }
        path.pop();

        Ok(())
    }
}
