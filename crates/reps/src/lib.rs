//! Reps: representations of debuggee values for a debugger UI.
//!
//! A [`Grip`] goes in, a [`RepTree`] comes out. The selector picks the rep
//! responsible for the grip from an ordered registry, and the rep renders it
//! at the requested [`Mode`], tagging interactive slots with the caller's
//! [`Hooks`]. Rendering is synchronous and pure; hooks are only ever called
//! by a render sink (see [`sink`]).

use once_cell::sync::Lazy;

pub mod capability;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod mode;
pub mod registry;
pub mod reps;
pub mod sink;
pub mod tree;

pub use capability::{Capability, Target};
pub use config::RepsConfig;
pub use context::{ELLIPSIS, RenderCx};
pub use error::RepError;
pub use grip::Grip;
pub use hooks::{HookHandler, HookName, Hooks, LinkProps, ObjectLinkFn};
pub use indextree::NodeId;
pub use mode::Mode;
pub use registry::{REGISTRY, RegistryBuilder, Rep, RepRegistry, get_rep};
pub use tree::{Binding, PointerEvent, RepNode, RepNodeKind, RepTree, Slot};

/// Limits used by [`render`], read from the environment once.
static DEFAULT_CONFIG: Lazy<RepsConfig> = Lazy::new(RepsConfig::from_env);

/// Renders grips with a given registry and limits.
pub struct Renderer<'r> {
    registry: &'r RepRegistry,
    config: RepsConfig,
}

impl<'r> Renderer<'r> {
    #[inline]
    #[must_use]
    pub const fn new(registry: &'r RepRegistry, config: RepsConfig) -> Self {
        Self { registry, config }
    }

    #[inline]
    pub const fn config(&self) -> &RepsConfig {
        &self.config
    }

    /// Render `grip` at `mode` into a fresh tree.
    pub fn render(&self, grip: &Grip, mode: Mode, hooks: &Hooks) -> RepTree {
        let mut tree = RepTree::new();
        let root = tree.root();
        let node = {
            let mut cx = RenderCx::new(&mut tree, self.registry, hooks, &self.config);
            cx.render_root(grip, mode)
        };
        tree.append(root, node);
        tree
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(&REGISTRY, DEFAULT_CONFIG.clone())
    }
}

/// Render `grip` with the process-wide registry and default limits.
pub fn render(grip: &Grip, mode: Mode, hooks: &Hooks) -> RepTree {
    Renderer::new(&REGISTRY, DEFAULT_CONFIG.clone()).render(grip, mode, hooks)
}

#[cfg(test)]
mod tests {
    use super::{Grip, Hooks, Mode, render};

    #[test]
    fn renders_primitives_through_the_global_registry() {
        let hooks = Hooks::new();
        assert_eq!(render(&Grip::Undefined, Mode::Unset, &hooks).text(), "undefined");
        assert_eq!(render(&Grip::Number(42.0), Mode::Tiny, &hooks).text(), "42");
        assert_eq!(render(&Grip::string("foo"), Mode::Long, &hooks).text(), "\"foo\"");
    }
}
