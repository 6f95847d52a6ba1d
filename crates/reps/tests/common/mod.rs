#![allow(dead_code, reason = "shared by several test binaries")]

use grip::node_type;
use reps::{Grip, Hooks, LinkProps, Mode, NodeId, RepTree};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn promise(state: Value) -> Value {
    json!({
        "type": "object",
        "actor": "server1.conn1.child1/obj54",
        "class": "Promise",
        "promiseState": state,
        "ownPropertyLength": 0,
        "preview": {
            "kind": "Object",
            "ownProperties": {},
            "ownPropertiesLength": 0
        }
    })
}

fn button(connected: bool) -> Value {
    json!({
        "type": "object",
        "actor": "server1.conn1.child1/obj116",
        "class": "HTMLButtonElement",
        "ownPropertyLength": 0,
        "preview": {
            "kind": "DOMNode",
            "nodeType": 1,
            "nodeName": "button",
            "isConnected": connected,
            "attributes": {
                "id": "btn-1",
                "class": "btn btn-err"
            },
            "attributesLength": 2
        }
    })
}

/// Promises in the states the protocol can report.
#[derive(Copy, Clone, Debug)]
pub enum PromiseStub {
    Pending,
    FulfilledWithString,
    FulfilledWithObject,
    FulfilledWithArray,
    FulfilledWithNode,
    FulfilledWithDisconnectedNode,
    RejectedWithString,
}

pub fn promise_stub(stub: PromiseStub) -> Grip {
    let value = match stub {
        PromiseStub::Pending => promise(json!({ "state": "pending" })),
        PromiseStub::FulfilledWithString => promise(json!({ "state": "fulfilled", "value": "foo" })),
        PromiseStub::FulfilledWithObject => promise(json!({
            "state": "fulfilled",
            "value": {
                "type": "object",
                "actor": "server1.conn1.child1/obj55",
                "class": "Object",
                "ownPropertyLength": 2
            }
        })),
        PromiseStub::FulfilledWithArray => promise(json!({
            "state": "fulfilled",
            "value": {
                "type": "object",
                "actor": "server1.conn1.child1/obj57",
                "class": "Array",
                "ownPropertyLength": 4,
                "preview": { "kind": "ArrayLike", "length": 3 }
            }
        })),
        PromiseStub::FulfilledWithNode => promise(json!({ "state": "fulfilled", "value": button(true) })),
        PromiseStub::FulfilledWithDisconnectedNode => {
            promise(json!({ "state": "fulfilled", "value": button(false) }))
        }
        PromiseStub::RejectedWithString => promise(json!({ "state": "rejected", "reason": "nope" })),
    };
    Grip::from_json(&value)
}

pub fn parse(value: Value) -> Grip {
    Grip::from_json(&value)
}

/// Render through the process-wide registry.
pub fn render(grip: &Grip, mode: Mode, hooks: &Hooks) -> RepTree {
    reps::render(grip, mode, hooks)
}

pub fn text(grip: &Grip, mode: Mode) -> String {
    render(grip, mode, &Hooks::new()).text()
}

/// Element-node grips reachable from `grip`, the way an inspector finds
/// the nodes it can select.
pub fn selectable_in_inspector_grips(root: &Grip) -> Vec<Grip> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if current
            .node_preview()
            .is_some_and(|node| node.node_type == node_type::ELEMENT)
        {
            found.push(current.clone());
        }
        stack.extend(current.children());
    }
    found
}

/// Decoration that surrounds each structural unit with asterisks.
pub fn star_link(tree: &mut RepTree, _props: &LinkProps<'_>, children: Vec<NodeId>) -> NodeId {
    let span = tree.new_span("");
    tree.append_text(span, "*");
    for child in children {
        tree.append(span, child);
    }
    tree.append_text(span, "*");
    span
}

/// Records every grip a hook is called with.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Grip>>>,
}

impl Recorder {
    pub fn handler(&self) -> impl Fn(&Grip) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |grip: &Grip| {
            if let Ok(mut calls) = calls.lock() {
                calls.push(grip.clone());
            }
        }
    }

    pub fn calls(&self) -> Vec<Grip> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}
