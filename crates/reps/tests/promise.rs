mod common;

use common::{PromiseStub, Recorder, init_logging, promise_stub, selectable_in_inspector_grips, star_link, text};
use reps::{HookName, Hooks, Mode, PointerEvent, get_rep, render, sink};

#[test]
fn promise_rep_is_selected_for_every_state() {
    init_logging();
    for stub in [
        PromiseStub::Pending,
        PromiseStub::FulfilledWithString,
        PromiseStub::FulfilledWithObject,
        PromiseStub::FulfilledWithArray,
        PromiseStub::FulfilledWithNode,
        PromiseStub::RejectedWithString,
    ] {
        assert_eq!(get_rep(&promise_stub(stub)).name(), "Promise", "{stub:?}");
    }
}

#[test]
fn pending_promise() {
    init_logging();
    let grip = promise_stub(PromiseStub::Pending);
    let expected = r#"Promise { <state>: "pending" }"#;
    assert_eq!(text(&grip, Mode::Unset), expected);
    assert_eq!(text(&grip, Mode::Short), expected);
    assert_eq!(text(&grip, Mode::Long), expected);
    assert_eq!(text(&grip, Mode::Tiny), r#"Promise { "pending" }"#);
}

#[test]
fn fulfilled_with_string() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithString);
    let expected = r#"Promise { <state>: "fulfilled", <value>: "foo" }"#;
    assert_eq!(text(&grip, Mode::Unset), expected);
    assert_eq!(text(&grip, Mode::Long), expected);
    assert_eq!(text(&grip, Mode::Tiny), r#"Promise { "fulfilled" }"#);
}

#[test]
fn fulfilled_with_object_shows_its_tiny_form() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithObject);
    let expected = r#"Promise { <state>: "fulfilled", <value>: Object }"#;
    assert_eq!(text(&grip, Mode::Unset), expected);
    assert_eq!(text(&grip, Mode::Long), expected);
    assert_eq!(text(&grip, Mode::Tiny), r#"Promise { "fulfilled" }"#);
}

#[test]
fn fulfilled_with_array_shows_its_length() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithArray);
    let expected = r#"Promise { <state>: "fulfilled", <value>: [3] }"#;
    assert_eq!(text(&grip, Mode::Unset), expected);
    assert_eq!(text(&grip, Mode::Long), expected);
    assert_eq!(text(&grip, Mode::Tiny), r#"Promise { "fulfilled" }"#);
}

#[test]
fn fulfilled_with_node() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithNode);
    assert_eq!(
        text(&grip, Mode::Unset),
        r#"Promise { <state>: "fulfilled", <value>: button#btn-1.btn.btn-err }"#
    );
}

#[test]
fn rejected_promise_labels_its_reason() {
    init_logging();
    let grip = promise_stub(PromiseStub::RejectedWithString);
    assert_eq!(
        text(&grip, Mode::Unset),
        r#"Promise { <state>: "rejected", <reason>: "nope" }"#
    );
    assert_eq!(text(&grip, Mode::Tiny), r#"Promise { "rejected" }"#);
}

#[test]
fn node_value_hover_hooks_receive_the_node_grip() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithNode);
    let over = Recorder::default();
    let out = Recorder::default();
    let hooks = Hooks::new()
        .with(HookName::DomNodeMouseOver, over.handler())
        .with(HookName::DomNodeMouseOut, out.handler());
    let tree = render(&grip, Mode::Unset, &hooks);

    let nodes = tree.find_by_class("objectBox-node");
    assert_eq!(nodes.len(), 1);
    assert_eq!(sink::dispatch(&tree, nodes[0], PointerEvent::MouseOver, &hooks), 1);
    assert_eq!(sink::dispatch(&tree, nodes[0], PointerEvent::MouseOut, &hooks), 1);

    let expected = selectable_in_inspector_grips(&grip);
    assert_eq!(expected.len(), 1);
    assert_eq!(over.calls(), expected);
    assert_eq!(out.calls(), expected);
}

#[test]
fn inspect_icon_selects_the_connected_node() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithNode);
    let clicks = Recorder::default();
    let hooks = Hooks::new().with(HookName::InspectIconClick, clicks.handler());
    let tree = render(&grip, Mode::Unset, &hooks);

    assert_eq!(tree.find_by_class("open-inspector").len(), 1);
    assert_eq!(
        sink::dispatch_on_class(&tree, "open-inspector", PointerEvent::Click, &hooks),
        1
    );
    assert_eq!(clicks.calls(), selectable_in_inspector_grips(&grip));
}

#[test]
fn disconnected_node_has_no_inspect_icon() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithDisconnectedNode);
    let clicks = Recorder::default();
    let hooks = Hooks::new().with(HookName::InspectIconClick, clicks.handler());
    let tree = render(&grip, Mode::Unset, &hooks);

    assert!(tree.find_by_class("open-inspector").is_empty());
    assert!(clicks.calls().is_empty());
}

#[test]
fn object_link_wraps_title_and_braces() {
    init_logging();
    let grip = promise_stub(PromiseStub::Pending);
    let hooks = Hooks::new().with_object_link(star_link);
    assert_eq!(
        render(&grip, Mode::Unset, &hooks).text(),
        r#"*Promise** { *<state>: "pending"* }*"#
    );
    assert_eq!(
        render(&grip, Mode::Tiny, &hooks).text(),
        r#"*Promise** { *"pending"* }*"#
    );
}

#[test]
fn object_link_wraps_each_bracket_of_a_tiny_array() {
    init_logging();
    let grip = promise_stub(PromiseStub::FulfilledWithArray);
    let hooks = Hooks::new().with_object_link(star_link);
    assert_eq!(
        render(&grip, Mode::Unset, &hooks).text(),
        r#"*Promise** { *<state>: "fulfilled", <value>: *[*3*]** }*"#
    );
}
