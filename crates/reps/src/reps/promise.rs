//! Promise rep.
//!
//! Tiny mode shows the state word alone:
//!
//! ```text
//! Promise { "pending" }
//! ```
//!
//! Every other mode shows a labeled record, with the payload (if any)
//! rendered through the selector in tiny mode:
//!
//! ```text
//! Promise { <state>: "fulfilled", <value>: [3] }
//! ```

use super::object_box;
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::Grip;
use indextree::NodeId;

pub struct PromiseRep;

impl Rep for PromiseRep {
    fn name(&self) -> &'static str {
        "Promise"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(grip
            .object()
            .is_some_and(|object| object.promise_state.is_some()))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "object");
        let Some(object) = grip.object() else {
            return span;
        };
        let Some(state) = &object.promise_state else {
            return span;
        };

        cx.object_link(span, grip, "objectTitle", &object.class);
        cx.object_link(span, grip, "objectLeftBrace", " { ");

        let status = Grip::string(state.status.as_str());
        if mode.is_tiny() {
            cx.render_child(span, &status, Mode::Tiny);
        } else {
            let payload = state.payload();
            let delim = if payload.is_some() { ", " } else { "" };
            cx.prop(span, "<state>", ": ", &status, Mode::Tiny, delim);
            if let Some((label, value)) = payload {
                cx.prop(span, &format!("<{label}>"), ": ", value, Mode::Tiny, "");
            }
        }

        cx.object_link(span, grip, "objectRightBrace", " }");
        span
    }
}
