use super::{more_caption, object_box};
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::{Grip, Preview};
use indextree::NodeId;

/// Array-like objects: `[3]` in tiny mode (`[]` when empty),
/// `[ 1, 2, 3, 7 more… ]` otherwise. Classes other than `Array` prefix their
/// name, e.g. `NodeList[2]`.
pub struct GripArrayRep;

impl Rep for GripArrayRep {
    fn name(&self) -> &'static str {
        "GripArray"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip.preview(), Some(Preview::ArrayLike { .. })))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "array");
        let Some(Preview::ArrayLike { length, items }) = grip.preview() else {
            return span;
        };
        let class = grip.class().unwrap_or("Array");
        let title = if class == "Array" { "" } else { class };

        if mode.is_tiny() {
            if !title.is_empty() {
                cx.object_link(span, grip, "objectTitle", title);
            }
            if *length == 0 {
                cx.object_link(span, grip, "arrayLeftBracket", "[]");
                return span;
            }
            cx.object_link(span, grip, "arrayLeftBracket", "[");
            let count = cx.tree().append_span(span, "arrayLength");
            cx.tree().append_text(count, length.to_string());
            cx.object_link(span, grip, "arrayRightBracket", "]");
            return span;
        }

        if !title.is_empty() {
            cx.object_link(span, grip, "objectTitle", &format!("{title} "));
        }
        let items = items.as_deref().unwrap_or(&[]);
        if *length == 0 && items.is_empty() {
            cx.object_link(span, grip, "arrayLeftBracket", "[]");
            return span;
        }

        let max = cx.config().max_items(mode);
        cx.object_link(span, grip, "arrayLeftBracket", "[ ");
        let mut shown = 0;
        for item in items.iter().take(max) {
            if cx.is_exhausted() {
                break;
            }
            if shown > 0 {
                cx.tree().append_text(span, ", ");
            }
            cx.render_child(span, item, Mode::Tiny);
            shown += 1;
        }
        let hidden = length.saturating_sub(shown);
        if hidden > 0 {
            if shown > 0 {
                cx.tree().append_text(span, ", ");
            }
            more_caption(cx, span, hidden);
        }
        cx.object_link(span, grip, "arrayRightBracket", " ]");
        span
    }
}
