//! Caller-supplied interaction hooks and the `object_link` decoration.
//!
//! Reps never call a hook. They only tag slots in the tree with a
//! [`HookName`]; the render sink looks the handler up here when the user
//! interacts with the slot. A hook that is not registered means the
//! matching affordance is not emitted at all.

use crate::tree::RepTree;
use grip::Grip;
use indextree::NodeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Names of the hooks a rep may attach to a slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HookName {
    /// Pointer entered a DOM node rep.
    DomNodeMouseOver,
    /// Pointer left a DOM node rep.
    DomNodeMouseOut,
    /// The inspect icon next to a connected DOM node was clicked.
    InspectIconClick,
    /// The ellipsis of a truncated long string was clicked.
    LongStringExpand,
}

impl HookName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DomNodeMouseOver => "onDOMNodeMouseOver",
            Self::DomNodeMouseOut => "onDOMNodeMouseOut",
            Self::InspectIconClick => "onInspectIconClick",
            Self::LongStringExpand => "onLongStringExpand",
        }
    }
}

/// Type-erased hook handler, called with the grip of the slot it fired from.
pub type HookHandler = Arc<dyn Fn(&Grip) + Send + Sync>;

/// Properties handed to the `object_link` decoration.
#[derive(Copy, Clone, Debug)]
pub struct LinkProps<'a> {
    /// Grip whose rep is being decorated.
    pub grip: &'a Grip,
    /// Class of the structural unit being wrapped, e.g. `objectLeftBrace`.
    pub class: &'a str,
}

/// Decoration wrapping structural units (type names, braces) of a rep.
///
/// Receives the detached children of the unit and returns the node that
/// replaces them. It must keep every child it was given so the text of the
/// rep is preserved.
pub type ObjectLinkFn = dyn Fn(&mut RepTree, &LinkProps<'_>, Vec<NodeId>) -> NodeId + Send + Sync;

/// Registry of hooks and decoration supplied for one render call.
#[derive(Clone, Default)]
pub struct Hooks {
    handlers: HashMap<HookName, HookHandler>,
    object_link: Option<Arc<ObjectLinkFn>>,
}

impl Hooks {
    /// Create an empty registry: no affordances, no decoration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook, replacing any previous handler of the same name.
    #[inline]
    pub fn register<F>(&mut self, name: HookName, handler: F)
    where
        F: Fn(&Grip) + Send + Sync + 'static,
    {
        self.handlers.insert(name, Arc::new(handler));
    }

    /// Builder form of [`Hooks::register`].
    #[inline]
    #[must_use]
    pub fn with<F>(mut self, name: HookName, handler: F) -> Self
    where
        F: Fn(&Grip) + Send + Sync + 'static,
    {
        self.register(name, handler);
        self
    }

    /// Install the `object_link` decoration.
    #[inline]
    #[must_use]
    pub fn with_object_link<F>(mut self, link: F) -> Self
    where
        F: Fn(&mut RepTree, &LinkProps<'_>, Vec<NodeId>) -> NodeId + Send + Sync + 'static,
    {
        self.object_link = Some(Arc::new(link));
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: HookName) -> Option<HookHandler> {
        self.handlers.get(&name).cloned()
    }

    #[inline]
    pub fn contains(&self, name: HookName) -> bool {
        self.handlers.contains_key(&name)
    }

    #[inline]
    pub fn object_link(&self) -> Option<&ObjectLinkFn> {
        self.object_link.as_deref()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("Hooks")
            .field("handlers", &names)
            .field("object_link", &self.object_link.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{HookName, Hooks};
    use grip::Grip;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn registered_hooks_are_found_by_name() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let hooks = Hooks::new().with(HookName::InspectIconClick, move |_grip| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(hooks.contains(HookName::InspectIconClick));
        assert!(!hooks.contains(HookName::DomNodeMouseOver));
        if let Some(handler) = hooks.get(HookName::InspectIconClick) {
            handler(&Grip::Null);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_lists_hook_names_only() {
        let hooks = Hooks::new().with(HookName::DomNodeMouseOut, |_grip| {});
        assert_eq!(
            format!("{hooks:?}"),
            "Hooks { handlers: [\"onDOMNodeMouseOut\"], object_link: false }"
        );
    }
}
