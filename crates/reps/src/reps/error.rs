use super::object_box;
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::{Grip, Preview};
use indextree::NodeId;

/// Error objects: name in tiny mode, `name: message` otherwise, plus the
/// stack in long mode.
pub struct ErrorRep;

impl Rep for ErrorRep {
    fn name(&self) -> &'static str {
        "Error"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip.preview(), Some(Preview::Error(_))))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "stackTrace");
        let Some(Preview::Error(preview)) = grip.preview() else {
            return span;
        };
        let mut content = preview.name.clone();
        if !mode.is_tiny() {
            content.push_str(": ");
            content.push_str(&preview.message);
        }
        if mode.is_long()
            && let Some(stack) = preview.stack.as_deref().filter(|stack| !stack.is_empty())
        {
            content.push_str("\nStack trace:\n");
            content.push_str(stack);
        }
        cx.object_link(span, grip, "objectTitle", &content);
        span
    }
}
