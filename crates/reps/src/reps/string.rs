use super::{crop, object_box, quote};
use crate::capability::{Capability, Target};
use crate::context::{ELLIPSIS, RenderCx};
use crate::error::RepError;
use crate::hooks::HookName;
use crate::mode::Mode;
use crate::registry::Rep;
use crate::tree::PointerEvent;
use grip::Grip;
use indextree::NodeId;

/// Quoted string values. Tiny mode crops long strings in the middle.
pub struct StringRep;

impl Rep for StringRep {
    fn name(&self) -> &'static str {
        "String"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::String(_)))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let text = match grip {
            Grip::String(text) => text.as_str(),
            _ => "",
        };
        let shown = if mode.is_tiny() {
            crop(text, cx.config().string_crop_limit)
        } else {
            text.to_owned()
        };
        let span = object_box(cx, "string");
        cx.tree().append_text(span, quote(&shown));
        span
    }
}

fn is_truncated(grip: &Grip) -> bool {
    matches!(grip, Grip::LongString(long) if long.is_truncated())
}

const LONG_STRING_CAPABILITIES: &[Capability] = &[Capability::new(
    Target::Ellipsis,
    PointerEvent::Click,
    HookName::LongStringExpand,
    is_truncated,
)];

/// Strings sent as an initial chunk plus a length.
///
/// The ellipsis after a truncated preview becomes clickable when the caller
/// supplies a [`HookName::LongStringExpand`] hook.
pub struct LongStringRep;

impl Rep for LongStringRep {
    fn name(&self) -> &'static str {
        "LongString"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::LongString(_)))
    }

    fn capabilities(&self) -> &'static [Capability] {
        LONG_STRING_CAPABILITIES
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let Grip::LongString(long) = grip else {
            return object_box(cx, "string");
        };
        let initial = if mode.is_tiny() {
            crop(&long.initial, cx.config().string_crop_limit)
        } else {
            long.initial.clone()
        };
        let quoted = quote(&initial);
        let body = quoted.strip_suffix('"').unwrap_or(&quoted);

        let span = object_box(cx, "string");
        cx.tree().append_text(span, body);
        if long.is_truncated() {
            let ellipsis = cx.tree().append_span(span, "longString-ellipsis");
            cx.tree().append_text(ellipsis, ELLIPSIS);
            cx.wire(ellipsis, grip, Target::Ellipsis);
        }
        cx.tree().append_text(span, "\"");
        span
    }
}
