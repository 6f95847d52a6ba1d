//! Declared affordances of reps.
//!
//! Each rep lists the hooks it accepts as a static table. Whether a binding
//! is emitted is decided in one place from two facts: the hook was supplied
//! by the caller, and the gate accepts the grip.

use crate::hooks::{HookName, Hooks};
use crate::tree::{Binding, PointerEvent};
use grip::Grip;
use smallvec::SmallVec;

/// Part of a rep an affordance attaches to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Target {
    /// The span holding the whole rep.
    Body,
    /// The inspect icon emitted after a DOM node rep.
    InspectIcon,
    /// The ellipsis of a truncated string.
    Ellipsis,
}

/// Intrinsic-state predicate gating an affordance.
pub type Gate = fn(&Grip) -> bool;

#[derive(Copy, Clone, Debug)]
pub struct Capability {
    pub target: Target,
    pub event: PointerEvent,
    pub hook: HookName,
    pub gate: Gate,
}

impl Capability {
    pub const fn new(target: Target, event: PointerEvent, hook: HookName, gate: Gate) -> Self {
        Self {
            target,
            event,
            hook,
            gate,
        }
    }

    /// Whether this capability produces a binding for `grip` under `hooks`.
    #[inline]
    pub fn applies(&self, grip: &Grip, hooks: &Hooks) -> bool {
        hooks.contains(self.hook) && (self.gate)(grip)
    }
}

/// Gate for affordances that only depend on hook presence.
pub const fn always(_grip: &Grip) -> bool {
    true
}

/// Bindings for `target` that apply to `grip`.
pub fn bindings_for(
    capabilities: &[Capability],
    target: Target,
    grip: &Grip,
    hooks: &Hooks,
) -> SmallVec<Binding, 2> {
    capabilities
        .iter()
        .filter(|capability| capability.target == target && capability.applies(grip, hooks))
        .map(|capability| Binding {
            event: capability.event,
            hook: capability.hook,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Capability, Target, always, bindings_for};
    use crate::hooks::{HookName, Hooks};
    use crate::tree::PointerEvent;
    use grip::Grip;

    const TABLE: &[Capability] = &[
        Capability::new(Target::Body, PointerEvent::MouseOver, HookName::DomNodeMouseOver, always),
        Capability::new(Target::InspectIcon, PointerEvent::Click, HookName::InspectIconClick, Grip::is_connected_node),
    ];

    #[test]
    fn missing_hook_yields_no_binding() {
        let hooks = Hooks::new();
        assert!(bindings_for(TABLE, Target::Body, &Grip::Null, &hooks).is_empty());
    }

    #[test]
    fn gate_rejects_even_with_hook() {
        let hooks = Hooks::new().with(HookName::InspectIconClick, |_grip| {});
        assert!(bindings_for(TABLE, Target::InspectIcon, &Grip::Null, &hooks).is_empty());
    }

    #[test]
    fn bindings_are_filtered_by_target() {
        let hooks = Hooks::new()
            .with(HookName::DomNodeMouseOver, |_grip| {})
            .with(HookName::InspectIconClick, |_grip| {});
        let body = bindings_for(TABLE, Target::Body, &Grip::Null, &hooks);
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].hook, HookName::DomNodeMouseOver);
    }
}
