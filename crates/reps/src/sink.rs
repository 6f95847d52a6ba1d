//! Reference render sink.
//!
//! A real UI shell turns the tree into markup and forwards pointer events to
//! the slots it finds. This module does the event half for any sink: it
//! resolves the hooks bound to a slot and invokes them with the slot's grip.

use crate::hooks::Hooks;
use crate::tree::{PointerEvent, RepTree};
use indextree::NodeId;
use log::debug;

/// Deliver `event` on `node`. Returns how many hooks were invoked.
///
/// Nodes without a slot, and slots without a binding for `event`, invoke
/// nothing.
pub fn dispatch(tree: &RepTree, node: NodeId, event: PointerEvent, hooks: &Hooks) -> usize {
    let Some(slot) = tree.slot(node) else {
        return 0;
    };
    let mut fired = 0;
    for name in slot.hooks_for(event) {
        if let Some(handler) = hooks.get(name) {
            debug!("{} on {} fires {}", event.as_str(), slot.grip.type_label(), name.as_str());
            handler(&slot.grip);
            fired += 1;
        }
    }
    fired
}

/// Deliver `event` on every span carrying `class`. Returns how many hooks
/// were invoked in total.
pub fn dispatch_on_class(tree: &RepTree, class: &str, event: PointerEvent, hooks: &Hooks) -> usize {
    tree.find_by_class(class)
        .into_iter()
        .map(|node| dispatch(tree, node, event, hooks))
        .sum()
}
