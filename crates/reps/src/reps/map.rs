use super::{more_caption, object_box};
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::{Grip, Preview};
use indextree::NodeId;

/// Map-like objects: `Map { "a" → 1, "b" → 2 }`; tiny mode shows the class.
pub struct GripMapRep;

impl Rep for GripMapRep {
    fn name(&self) -> &'static str {
        "GripMap"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip.preview(), Some(Preview::MapLike { .. })))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "object");
        let (Some(class), Some(Preview::MapLike { size, entries })) = (grip.class(), grip.preview())
        else {
            return span;
        };
        cx.object_link(span, grip, "objectTitle", class);
        if mode.is_tiny() {
            return span;
        }

        let max = cx.config().max_items(mode);
        cx.object_link(span, grip, "objectLeftBrace", " { ");
        let mut shown = 0;
        for (key, value) in entries.iter().take(max) {
            if cx.is_exhausted() {
                break;
            }
            if shown > 0 {
                cx.tree().append_text(span, ", ");
            }
            let entry = cx.tree().append_span(span, "mapEntry");
            cx.render_child(entry, key, Mode::Tiny);
            cx.tree().append_text(entry, " → ");
            cx.render_child(entry, value, Mode::Tiny);
            shown += 1;
        }
        let hidden = size.saturating_sub(shown);
        if hidden > 0 {
            if shown > 0 {
                cx.tree().append_text(span, ", ");
            }
            more_caption(cx, span, hidden);
        }
        cx.object_link(span, grip, "objectRightBrace", " }");
        span
    }
}
