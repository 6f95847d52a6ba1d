//! Representation trees: the output of every rep.
//!
//! A tree is an ordered arena of spans and text runs. Spans may carry a
//! [`Slot`], which tags the span with the grip it stands for and the hooks a
//! render sink should fire for pointer events on it. The tree never runs a
//! hook itself.

use crate::hooks::HookName;
use grip::Grip;
use indextree::{Arena, NodeId};
use log::warn;
use smallvec::SmallVec;

mod printing;

/// Pointer events a render sink forwards to slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerEvent {
    Click,
    MouseOver,
    MouseOut,
}

impl PointerEvent {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseOver => "mouseover",
            Self::MouseOut => "mouseout",
        }
    }
}

/// One pointer event wired to one hook.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    pub event: PointerEvent,
    pub hook: HookName,
}

/// Interactive attachment point of a span.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    /// Grip passed to every hook fired from this slot.
    pub grip: Grip,
    pub bindings: SmallVec<Binding, 2>,
}

impl Slot {
    /// Hooks bound to `event`, in binding order.
    pub fn hooks_for(&self, event: PointerEvent) -> impl Iterator<Item = HookName> + '_ {
        self.bindings
            .iter()
            .filter(move |binding| binding.event == event)
            .map(|binding| binding.hook)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RepNodeKind {
    #[default]
    Fragment,
    Span { class: String },
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepNode {
    pub kind: RepNodeKind,
    pub slot: Option<Slot>,
}

impl RepNode {
    /// Whether this node is a span whose class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        match &self.kind {
            RepNodeKind::Span { class: list } => list.split_whitespace().any(|token| token == class),
            _ => false,
        }
    }
}

pub struct RepTree {
    arena: Arena<RepNode>,
    root: NodeId,
}

impl RepTree {
    /// An empty tree holding only its root fragment.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(RepNode::default());
        Self { arena, root }
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes created in this tree, root included. Detached nodes
    /// count too; this is what the node bound is checked against.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether no node besides the root has been created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Create a detached text run.
    pub fn new_text(&mut self, text: impl Into<String>) -> NodeId {
        self.arena.new_node(RepNode {
            kind: RepNodeKind::Text(text.into()),
            slot: None,
        })
    }

    /// Create a detached span.
    pub fn new_span(&mut self, class: impl Into<String>) -> NodeId {
        self.arena.new_node(RepNode {
            kind: RepNodeKind::Span {
                class: class.into(),
            },
            slot: None,
        })
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if let Err(err) = parent.checked_append(child, &mut self.arena) {
            warn!("dropping rep node that cannot be appended: {err:?}");
        }
    }

    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let node = self.new_text(text);
        self.append(parent, node);
        node
    }

    pub fn append_span(&mut self, parent: NodeId, class: impl Into<String>) -> NodeId {
        let node = self.new_span(class);
        self.append(parent, node);
        node
    }

    pub fn set_slot(&mut self, node: NodeId, slot: Slot) {
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().slot = Some(slot);
        }
    }

    #[inline]
    pub fn node(&self, node: NodeId) -> Option<&RepNode> {
        self.arena.get(node).map(indextree::Node::get)
    }

    #[inline]
    pub fn slot(&self, node: NodeId) -> Option<&Slot> {
        self.node(node).and_then(|entry| entry.slot.as_ref())
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    /// Spans below the root carrying `class` in their class list, in
    /// document order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.root
            .descendants(&self.arena)
            .filter(|id| self.node(*id).is_some_and(|entry| entry.has_class(class)))
            .collect()
    }

    /// Grips of every slot in the tree, in document order.
    pub fn slot_grips(&self) -> Vec<&Grip> {
        self.root
            .descendants(&self.arena)
            .filter_map(|id| self.slot(id))
            .map(|slot| &slot.grip)
            .collect()
    }
}

impl Default for RepTree {
    fn default() -> Self {
        Self::new()
    }
}
