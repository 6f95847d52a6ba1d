//! DOM node reps.
//!
//! Element reps are the main inspectable entities: hovering them highlights
//! the node in the page and the inspect icon selects it in the inspector.
//! Both are declared in [`NODE_CAPABILITIES`]; the icon is additionally
//! gated on the node being connected to its document.

use super::{crop, object_box, quote};
use crate::capability::{Capability, Target, always};
use crate::context::RenderCx;
use crate::error::RepError;
use crate::hooks::HookName;
use crate::mode::Mode;
use crate::registry::Rep;
use crate::tree::PointerEvent;
use grip::{Grip, NodePreview, node_type};
use indextree::NodeId;

const NODE_CAPABILITIES: &[Capability] = &[
    Capability::new(Target::Body, PointerEvent::MouseOver, HookName::DomNodeMouseOver, always),
    Capability::new(Target::Body, PointerEvent::MouseOut, HookName::DomNodeMouseOut, always),
    Capability::new(
        Target::InspectIcon,
        PointerEvent::Click,
        HookName::InspectIconClick,
        Grip::is_connected_node,
    ),
];

fn has_node_type(grip: &Grip, wanted: u16) -> bool {
    grip.node_preview()
        .is_some_and(|node| node.node_type == wanted)
}

/// Body span of a node rep with its hover bindings wired.
fn node_body(cx: &mut RenderCx<'_>, grip: &Grip) -> NodeId {
    let span = object_box(cx, "node");
    cx.wire(span, grip, Target::Body);
    span
}

/// Attributes with `id` first and `class` second, as the inspector shows them.
fn ordered_attributes(node: &NodePreview) -> Vec<(&str, &str)> {
    let mut attributes: Vec<(&str, &str)> = node
        .attributes
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let rank = |name: &str| match name {
        "id" => 0,
        "class" => 1,
        _ => 2,
    };
    attributes.sort_by_key(|(name, _)| rank(name));
    attributes
}

pub struct ElementNodeRep;

impl ElementNodeRep {
    fn render_tiny(cx: &mut RenderCx<'_>, span: NodeId, node: &NodePreview) {
        let tree = cx.tree();
        let tag = tree.append_span(span, "tag-name");
        tree.append_text(tag, node.node_name.to_lowercase());
        if let Some(id) = node.attribute("id").filter(|id| !id.is_empty()) {
            let id_span = tree.append_span(span, "attr-value");
            tree.append_text(id_span, format!("#{id}"));
        }
        if let Some(classes) = node.attribute("class") {
            let joined: String = classes
                .split_whitespace()
                .map(|class| format!(".{class}"))
                .collect();
            if !joined.is_empty() {
                let class_span = tree.append_span(span, "attr-value");
                tree.append_text(class_span, joined);
            }
        }
    }

    fn render_full(cx: &mut RenderCx<'_>, span: NodeId, node: &NodePreview) {
        let tree = cx.tree();
        tree.append_text(span, "<");
        let tag = tree.append_span(span, "tag-name");
        tree.append_text(tag, node.node_name.to_lowercase());
        for (name, value) in ordered_attributes(node) {
            tree.append_text(span, " ");
            let attr = tree.append_span(span, "attr-container");
            let name_span = tree.append_span(attr, "attr-name");
            tree.append_text(name_span, name);
            tree.append_text(attr, "=");
            let value_span = tree.append_span(attr, "attr-value");
            tree.append_text(value_span, quote(value));
        }
        tree.append_text(span, ">");
    }
}

impl Rep for ElementNodeRep {
    fn name(&self) -> &'static str {
        "ElementNode"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(has_node_type(grip, node_type::ELEMENT))
    }

    fn capabilities(&self) -> &'static [Capability] {
        NODE_CAPABILITIES
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let wrapper = cx.tree().new_span("objectBox-wrapper");
        let span = node_body(cx, grip);
        cx.tree().append(wrapper, span);
        let Some(node) = grip.node_preview() else {
            return wrapper;
        };
        if mode.is_tiny() {
            Self::render_tiny(cx, span, node);
        } else {
            Self::render_full(cx, span, node);
        }
        cx.affordance(wrapper, grip, Target::InspectIcon, "open-inspector");
        wrapper
    }
}

pub struct TextNodeRep;

impl Rep for TextNodeRep {
    fn name(&self) -> &'static str {
        "TextNode"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(has_node_type(grip, node_type::TEXT))
    }

    fn capabilities(&self) -> &'static [Capability] {
        NODE_CAPABILITIES
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let wrapper = cx.tree().new_span("objectBox-wrapper");
        let span = node_body(cx, grip);
        cx.tree().append(wrapper, span);
        cx.object_link(span, grip, "objectTitle", "#text");
        if !mode.is_tiny() {
            let text = grip
                .node_preview()
                .and_then(|node| node.text_content.as_deref())
                .unwrap_or("");
            cx.tree().append_text(span, format!(" {}", quote(text)));
        }
        cx.affordance(wrapper, grip, Target::InspectIcon, "open-inspector");
        wrapper
    }
}

pub struct CommentNodeRep;

impl Rep for CommentNodeRep {
    fn name(&self) -> &'static str {
        "CommentNode"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(has_node_type(grip, node_type::COMMENT))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let text = grip
            .node_preview()
            .and_then(|node| node.text_content.as_deref())
            .unwrap_or("");
        let shown = if mode.is_tiny() {
            crop(text, cx.config().string_crop_limit)
        } else {
            text.to_owned()
        };
        let span = object_box(cx, "comment");
        cx.tree().append_text(span, format!("<!-- {shown} -->"));
        span
    }
}
