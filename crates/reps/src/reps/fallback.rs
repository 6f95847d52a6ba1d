use super::object_box;
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::Grip;
use indextree::NodeId;

/// Last-resort rep: accepts every grip and shows its type label without
/// structure.
pub struct FallbackRep;

impl Rep for FallbackRep {
    fn name(&self) -> &'static str {
        "Fallback"
    }

    fn supports(&self, _grip: &Grip) -> Result<bool, RepError> {
        Ok(true)
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "unknown");
        cx.tree().append_text(span, grip.type_label());
        span
    }
}
