//! Per-call rendering state shared by every rep of one render.

use crate::capability::{self, Capability, Target};
use crate::config::RepsConfig;
use crate::hooks::{Hooks, LinkProps};
use crate::mode::Mode;
use crate::registry::{Rep, RepRegistry};
use crate::tree::{RepTree, Slot};
use grip::Grip;
use indextree::NodeId;
use log::debug;

/// Marker substituted for children cut by the depth or size bound.
pub const ELLIPSIS: &str = "…";

/// Rendering context: the tree being built, the registry children are
/// selected from, the caller's hooks, and the limits.
pub struct RenderCx<'a> {
    tree: &'a mut RepTree,
    registry: &'a RepRegistry,
    hooks: &'a Hooks,
    config: &'a RepsConfig,
    depth: usize,
    /// Declared capabilities of the rep currently rendering.
    capabilities: &'static [Capability],
}

impl<'a> RenderCx<'a> {
    pub fn new(
        tree: &'a mut RepTree,
        registry: &'a RepRegistry,
        hooks: &'a Hooks,
        config: &'a RepsConfig,
    ) -> Self {
        Self {
            tree,
            registry,
            hooks,
            config,
            depth: 0,
            capabilities: &[],
        }
    }

    #[inline]
    pub fn tree(&mut self) -> &mut RepTree {
        self.tree
    }

    #[inline]
    pub const fn config(&self) -> &RepsConfig {
        self.config
    }

    #[inline]
    pub const fn hooks(&self) -> &Hooks {
        self.hooks
    }

    /// Nesting depth of the rep currently rendering; 0 for the top-level grip.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the depth or node bound has been reached. Containers stop
    /// adding children once this holds.
    pub fn is_exhausted(&self) -> bool {
        self.depth >= self.config.max_depth || self.tree.len() >= self.config.max_nodes
    }

    /// Render the top-level grip into a detached node.
    pub fn render_root(&mut self, grip: &Grip, mode: Mode) -> NodeId {
        let registry = self.registry;
        self.render_with(registry.select(grip), grip, mode)
    }

    /// Run `rep` with its declared capabilities in scope, restoring the
    /// caller's afterwards.
    fn render_with(&mut self, rep: &dyn Rep, grip: &Grip, mode: Mode) -> NodeId {
        let outer = std::mem::replace(&mut self.capabilities, rep.capabilities());
        let node = rep.render(grip, mode, self);
        self.capabilities = outer;
        node
    }

    /// Render a child grip through the selector and append it to `parent`.
    ///
    /// Past the depth or node bound an elision marker is appended instead.
    pub fn render_child(&mut self, parent: NodeId, grip: &Grip, mode: Mode) {
        if self.is_exhausted() {
            debug!(
                "eliding {} at depth {} ({} nodes)",
                grip.type_label(),
                self.depth,
                self.tree.len()
            );
            self.elide(parent);
            return;
        }
        let registry = self.registry;
        let rep = registry.select(grip);
        self.depth += 1;
        let node = self.render_with(rep, grip, mode);
        self.depth -= 1;
        self.tree.append(parent, node);
    }

    /// Append an elision marker to `parent`.
    pub fn elide(&mut self, parent: NodeId) {
        let marker = self.tree.append_span(parent, "more-ellipsis");
        self.tree.append_text(marker, ELLIPSIS);
    }

    /// Append a structural unit (type name, brace, bracket) to `parent`,
    /// wrapped by the `object_link` decoration when one was supplied.
    pub fn object_link(&mut self, parent: NodeId, grip: &Grip, class: &str, text: &str) {
        let hooks = self.hooks;
        let text_node = self.tree.new_text(text);
        let unit = if let Some(link) = hooks.object_link() {
            let props = LinkProps { grip, class };
            link(&mut *self.tree, &props, vec![text_node])
        } else {
            let span = self.tree.new_span(class);
            self.tree.append(span, text_node);
            span
        };
        self.tree.append(parent, unit);
    }

    /// Append `name<equal>value<delim>` to `parent`, rendering the value
    /// through the selector.
    pub fn prop(
        &mut self,
        parent: NodeId,
        name: &str,
        equal: &str,
        value: &Grip,
        mode: Mode,
        delim: &str,
    ) {
        let span = self.tree.append_span(parent, "nodeName");
        self.tree.append_text(span, name);
        self.tree.append_text(parent, equal);
        self.render_child(parent, value, mode);
        if !delim.is_empty() {
            self.tree.append_text(parent, delim);
        }
    }

    /// Attach the current rep's bindings for `target` to `node`, if any
    /// apply to `grip`. A rep that declares no capability for `target` never
    /// gets a slot.
    pub fn wire(&mut self, node: NodeId, grip: &Grip, target: Target) {
        let bindings = capability::bindings_for(self.capabilities, target, grip, self.hooks);
        if bindings.is_empty() {
            return;
        }
        self.tree.set_slot(
            node,
            Slot {
                grip: grip.clone(),
                bindings,
            },
        );
    }

    /// Append an affordance span of class `class` to `parent` when at least
    /// one of the current rep's capabilities for `target` applies. Returns
    /// the span if emitted.
    pub fn affordance(
        &mut self,
        parent: NodeId,
        grip: &Grip,
        target: Target,
        class: &str,
    ) -> Option<NodeId> {
        let bindings = capability::bindings_for(self.capabilities, target, grip, self.hooks);
        if bindings.is_empty() {
            return None;
        }
        let span = self.tree.append_span(parent, class);
        self.tree.set_slot(
            span,
            Slot {
                grip: grip.clone(),
                bindings,
            },
        );
        Some(span)
    }
}
