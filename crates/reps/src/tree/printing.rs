use std::fmt;

use super::{RepNode, RepNodeKind, RepTree, Slot};
use indextree::NodeId;

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn collect_text(tree: &RepTree, id: NodeId, out: &mut String) {
    if let Some(RepNode {
        kind: RepNodeKind::Text(text),
        ..
    }) = tree.node(id)
    {
        out.push_str(text);
    }
    for child in tree.children(id) {
        collect_text(tree, child, out);
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn slot_to_json(slot: &Slot) -> Value {
    let bindings: Vec<Value> = slot
        .bindings
        .iter()
        .map(|binding| json!({ "event": binding.event.as_str(), "hook": binding.hook.as_str() }))
        .collect();
    json!({
        "grip": slot.grip.type_label(),
        "actor": slot.grip.actor().map(|actor| actor.as_str()),
        "bindings": bindings,
    })
}

fn node_to_json(tree: &RepTree, id: NodeId) -> Value {
    let Some(node) = tree.node(id) else {
        return Value::Null;
    };
    let children: Vec<Value> = tree
        .children(id)
        .map(|child| node_to_json(tree, child))
        .collect();
    match &node.kind {
        RepNodeKind::Fragment => json!({ "type": "fragment", "children": children }),
        RepNodeKind::Text(text) => json!({ "type": "text", "text": text }),
        RepNodeKind::Span { class } => {
            let mut obj = Map::new();
            obj.insert(String::from("type"), Value::from("span"));
            obj.insert(String::from("class"), Value::from(class.as_str()));
            if let Some(slot) = &node.slot {
                obj.insert(String::from("slot"), slot_to_json(slot));
            }
            obj.insert(String::from("children"), Value::Array(children));
            Value::Object(obj)
        }
    }
}

impl RepTree {
    /// Textual serialization: every text run, in document order.
    pub fn text(&self) -> String {
        self.node_text(self.root)
    }

    /// Text of the subtree rooted at `id`.
    pub fn node_text(&self, id: NodeId) -> String {
        let mut out = String::new();
        collect_text(self, id, &mut out);
        out
    }

    /// Build a deterministic JSON representation of the tree.
    /// Schema:
    /// - Fragment: { "type":"fragment", "children":[ ... ] }
    /// - Span: { "type":"span", "class":"...", "slot"?: {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    pub fn to_json_value(&self) -> Value {
        node_to_json(self, self.root)
    }

    /// Pretty JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value()).unwrap_or_else(|_| String::from("{}"))
    }
}

impl fmt::Debug for RepTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_node(
            tree: &RepTree,
            id: NodeId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            let Some(node) = tree.node(id) else {
                return Ok(());
            };
            match &node.kind {
                RepNodeKind::Fragment => {
                    write_indent(f, depth)?;
                    writeln!(f, "#fragment")?;
                }
                RepNodeKind::Text(text) => {
                    write_indent(f, depth)?;
                    writeln!(f, "\"{}\"", escape_text(text))?;
                    return Ok(());
                }
                RepNodeKind::Span { class } => {
                    write_indent(f, depth)?;
                    write!(f, "<span class=\"{}\"", escape_text(class))?;
                    if let Some(slot) = &node.slot {
                        for binding in &slot.bindings {
                            write!(f, " on{}=\"{}\"", binding.event.as_str(), binding.hook.as_str())?;
                        }
                    }
                    writeln!(f, ">")?;
                }
            }
            for child in tree.children(id) {
                fmt_node(tree, child, f, depth + 1)?;
            }
            Ok(())
        }

        writeln!(f, "RepTree")?;
        fmt_node(self, self.root, f, 0)
    }
}
