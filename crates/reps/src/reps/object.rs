use super::{more_caption, object_box};
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::{Grip, Preview, PropertyDescriptor};
use indextree::NodeId;

/// Generic object rep: `Object { a: 1, b: "x", 2 more… }`.
///
/// Accepts every object grip, so it must stay behind the reps for more
/// specific object shapes.
pub struct GripRep;

fn accessor_label(getter: bool, setter: bool) -> &'static str {
    match (getter, setter) {
        (true, true) => "Getter & Setter",
        (true, false) => "Getter",
        (false, true) => "Setter",
        (false, false) => "undefined",
    }
}

impl Rep for GripRep {
    fn name(&self) -> &'static str {
        "Grip"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(grip.object().is_some())
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "object");
        let Some(object) = grip.object() else {
            return span;
        };
        cx.object_link(span, grip, "objectTitle", &object.class);
        if mode.is_tiny() {
            return span;
        }

        let (properties, total): (&[(String, PropertyDescriptor)], usize) = match &object.preview {
            Some(Preview::Object {
                own_properties,
                own_properties_length,
            }) => (own_properties.as_slice(), *own_properties_length),
            _ => (&[][..], object.own_property_length.unwrap_or_default()),
        };
        let max = cx.config().max_items(mode);
        cx.object_link(span, grip, "objectLeftBrace", " { ");
        let mut shown = 0;
        for (name, descriptor) in properties.iter().take(max) {
            if cx.is_exhausted() {
                break;
            }
            if shown > 0 {
                cx.tree().append_text(span, ", ");
            }
            match descriptor {
                PropertyDescriptor::Value(value) => {
                    cx.prop(span, name, ": ", value, Mode::Tiny, "");
                }
                PropertyDescriptor::Accessor { getter, setter } => {
                    let tree = cx.tree();
                    let name_span = tree.append_span(span, "nodeName");
                    tree.append_text(name_span, name.as_str());
                    tree.append_text(span, ": ");
                    let accessor = tree.append_span(span, "objectBox objectBox-accessor");
                    tree.append_text(accessor, accessor_label(getter.is_some(), setter.is_some()));
                }
            }
            shown += 1;
        }
        let hidden = total.saturating_sub(shown);
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
