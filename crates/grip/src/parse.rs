use crate::preview::{
    ErrorPreview, FunctionInfo, NodePreview, Preview, PromiseState, PromiseStatus,
    PropertyDescriptor,
};
use crate::{ActorId, Grip, LongString, ObjectGrip};
use log::debug;
use serde_json::{Map, Value};

// -----------------------
// Field helpers
// -----------------------

fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn usize_field(map: &Map<String, Value>, key: &str) -> Option<usize> {
    map.get(key).and_then(Value::as_u64).map(|count| count as usize)
}

fn actor_field(map: &Map<String, Value>) -> Option<ActorId> {
    map.get("actor").and_then(Value::as_str).map(ActorId::new)
}

fn grip_field(map: &Map<String, Value>, key: &str) -> Option<Box<Grip>> {
    map.get(key).map(|value| Box::new(grip_from_json(value)))
}

pub fn grip_from_json(value: &Value) -> Grip {
    match value {
        Value::Null => Grip::Null,
        Value::Bool(flag) => Grip::Bool(*flag),
        Value::Number(number) => number.as_f64().map_or(Grip::NaN, Grip::from),
        Value::String(text) => Grip::String(text.clone()),
        Value::Array(_) => Grip::Unknown {
            type_name: None,
            raw: value.clone(),
        },
        Value::Object(map) => typed_grip(map, value),
    }
}

fn typed_grip(map: &Map<String, Value>, raw: &Value) -> Grip {
    let type_name = map.get("type").and_then(Value::as_str);
    match type_name {
        Some("undefined") => Grip::Undefined,
        Some("null") => Grip::Null,
        Some("NaN") => Grip::NaN,
        Some("Infinity") => Grip::Infinity,
        Some("-Infinity") => Grip::NegativeInfinity,
        Some("-0") => Grip::NegativeZero,
        Some("symbol") => Grip::Symbol {
            name: str_field(map, "name"),
        },
        Some("longString") => Grip::LongString(LongString {
            initial: str_field(map, "initial").unwrap_or_default(),
            length: usize_field(map, "length").unwrap_or_default(),
            actor: actor_field(map),
        }),
        Some("object") => Grip::Object(Box::new(object_grip(map))),
        other => {
            debug!("unrecognized grip type {other:?}");
            Grip::Unknown {
                type_name: other.map(str::to_owned),
                raw: raw.clone(),
            }
        }
    }
}

fn object_grip(map: &Map<String, Value>) -> ObjectGrip {
    let class = str_field(map, "class").unwrap_or_else(|| String::from("Object"));
    let function = (class == "Function").then(|| function_info(map));
    ObjectGrip {
        actor: actor_field(map),
        own_property_length: usize_field(map, "ownPropertyLength"),
        preview: map
            .get("preview")
            .and_then(Value::as_object)
            .map(preview_from_json),
        promise_state: map
            .get("promiseState")
            .and_then(Value::as_object)
            .and_then(promise_state),
        display_string: str_field(map, "displayString"),
        function,
        class,
    }
}

fn function_info(map: &Map<String, Value>) -> FunctionInfo {
    let parameter_names = map
        .get("parameterNames")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();
    FunctionInfo {
        name: str_field(map, "name"),
        display_name: str_field(map, "displayName"),
        user_display_name: str_field(map, "userDisplayName"),
        parameter_names,
    }
}

fn promise_state(map: &Map<String, Value>) -> Option<PromiseState> {
    let word = map.get("state").and_then(Value::as_str)?;
    let Some(status) = PromiseStatus::parse(word) else {
        debug!("unrecognized promise state {word:?}");
        return None;
    };
    Some(PromiseState {
        status,
        value: grip_field(map, "value"),
        reason: grip_field(map, "reason"),
    })
}

fn preview_from_json(map: &Map<String, Value>) -> Preview {
    match map.get("kind").and_then(Value::as_str) {
        Some("ArrayLike") => Preview::ArrayLike {
            length: usize_field(map, "length").unwrap_or_default(),
            items: map
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(grip_from_json).collect()),
        },
        Some("Object") => {
            let own_properties: Vec<(String, PropertyDescriptor)> = map
                .get("ownProperties")
                .and_then(Value::as_object)
                .map(|props| {
                    props
                        .iter()
                        .map(|(name, descriptor)| (name.clone(), property_descriptor(descriptor)))
                        .collect()
                })
                .unwrap_or_default();
            let own_properties_length =
                usize_field(map, "ownPropertiesLength").unwrap_or(own_properties.len());
            Preview::Object {
                own_properties,
                own_properties_length,
            }
        }
        Some("MapLike") => {
            let entries: Vec<(Grip, Grip)> = map
                .get("entries")
                .and_then(Value::as_array)
                .map(|entries| entries.iter().filter_map(map_entry).collect())
                .unwrap_or_default();
            Preview::MapLike {
                size: usize_field(map, "size").unwrap_or(entries.len()),
                entries,
            }
        }
        Some("DOMNode") => Preview::DomNode(node_preview(map)),
        Some("Error") => Preview::Error(ErrorPreview {
            name: str_field(map, "name").unwrap_or_else(|| String::from("Error")),
            message: str_field(map, "message").unwrap_or_default(),
            stack: str_field(map, "stack"),
        }),
        Some("ObjectWithText") => Preview::ObjectWithText {
            text: str_field(map, "text").unwrap_or_default(),
        },
        Some("ObjectWithURL") => Preview::ObjectWithUrl {
            url: str_field(map, "url").unwrap_or_default(),
        },
        None if map.contains_key("timestamp") => Preview::Date {
            timestamp: map.get("timestamp").and_then(Value::as_f64),
        },
        other => Preview::Other {
            kind: other.map(str::to_owned),
        },
    }
}

fn property_descriptor(descriptor: &Value) -> PropertyDescriptor {
    let Some(fields) = descriptor.as_object() else {
        return PropertyDescriptor::Value(grip_from_json(descriptor));
    };
    if let Some(value) = fields.get("value") {
        return PropertyDescriptor::Value(grip_from_json(value));
    }
    if fields.contains_key("get") || fields.contains_key("set") {
        let accessor = |key: &str| {
            fields
                .get(key)
                .filter(|grip| !grip.is_null())
                .map(grip_from_json)
                .filter(|grip| !matches!(grip, Grip::Undefined))
        };
        return PropertyDescriptor::Accessor {
            getter: accessor("get"),
            setter: accessor("set"),
        };
    }
    PropertyDescriptor::Value(Grip::Undefined)
}

fn map_entry(entry: &Value) -> Option<(Grip, Grip)> {
    match entry.as_array()?.as_slice() {
        [key, value] => Some((grip_from_json(key), grip_from_json(value))),
        _ => None,
    }
}

fn node_preview(map: &Map<String, Value>) -> NodePreview {
    let attributes = map
        .get("attributes")
        .and_then(Value::as_object)
        .map(|attrs| {
            attrs
                .iter()
                .map(|(name, value)| {
                    let text = value
                        .as_str()
                        .map_or_else(|| value.to_string(), str::to_owned);
                    (name.clone(), text)
                })
                .collect()
        })
        .unwrap_or_default();
    NodePreview {
        node_type: map
            .get("nodeType")
            .and_then(Value::as_u64)
            .and_then(|kind| u16::try_from(kind).ok())
            .unwrap_or_default(),
        node_name: str_field(map, "nodeName").unwrap_or_default(),
        is_connected: map
            .get("isConnected")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        attributes,
        text_content: str_field(map, "textContent"),
    }
}

#[cfg(test)]
mod tests {
    use super::grip_from_json;
    use crate::preview::{Preview, PromiseState, PromiseStatus, PropertyDescriptor};
    use crate::Grip;
    use serde_json::json;

    #[test]
    fn primitives_map_to_their_variants() {
        assert_eq!(grip_from_json(&json!(42)), Grip::Number(42.0));
        assert_eq!(grip_from_json(&json!("foo")), Grip::string("foo"));
        assert_eq!(grip_from_json(&json!(true)), Grip::Bool(true));
        assert_eq!(grip_from_json(&json!(null)), Grip::Null);
        assert_eq!(grip_from_json(&json!({"type": "undefined"})), Grip::Undefined);
        assert_eq!(grip_from_json(&json!({"type": "-0"})), Grip::NegativeZero);
        assert_eq!(grip_from_json(&json!({"type": "-Infinity"})), Grip::NegativeInfinity);
    }

    #[test]
    fn unknown_type_is_kept_not_rejected() {
        let grip = grip_from_json(&json!({"type": "bigint", "text": "12"}));
        assert!(matches!(grip, Grip::Unknown { type_name: Some(ref name), .. } if name == "bigint"));
        assert_eq!(grip.type_label(), "bigint");
    }

    #[test]
    fn promise_state_with_payload() {
        let grip = grip_from_json(&json!({
            "type": "object",
            "class": "Promise",
            "actor": "server1.conn1.child1/obj54",
            "promiseState": { "state": "fulfilled", "value": "foo" },
        }));
        let state = grip
            .object()
            .and_then(|object| object.promise_state.as_ref());
        assert_eq!(state.map(|state| state.status), Some(PromiseStatus::Fulfilled));
        assert_eq!(
            state.and_then(PromiseState::payload),
            Some(("value", &Grip::string("foo")))
        );
    }

    #[test]
    fn unknown_promise_state_is_dropped() {
        let grip = grip_from_json(&json!({
            "type": "object",
            "class": "Promise",
            "promiseState": { "state": "sleeping" },
        }));
        assert!(grip.object().is_some_and(|object| object.promise_state.is_none()));
    }

    #[test]
    fn object_preview_keeps_property_order() {
        let grip = grip_from_json(&json!({
            "type": "object",
            "class": "Object",
            "preview": {
                "kind": "Object",
                "ownProperties": {
                    "zeta": { "value": 1 },
                    "alpha": { "get": { "type": "object", "class": "Function" }, "set": { "type": "undefined" } },
                },
                "ownPropertiesLength": 2,
            },
        }));
        assert!(matches!(grip.preview(), Some(Preview::Object { .. })), "{grip:?}");
        let Some(Preview::Object { own_properties, .. }) = grip.preview() else {
            return;
        };
        let names: Vec<&str> = own_properties.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
        assert!(matches!(
            own_properties.get(1),
            Some((_, PropertyDescriptor::Accessor { getter: Some(_), setter: None }))
        ));
    }

    #[test]
    fn node_connectedness_defaults_to_detached() {
        let grip = grip_from_json(&json!({
            "type": "object",
            "class": "HTMLDivElement",
            "preview": { "kind": "DOMNode", "nodeType": 1, "nodeName": "div" },
        }));
        assert!(!grip.is_connected_node());
    }

    #[test]
    fn children_walk_promise_payloads() {
        let grip = grip_from_json(&json!({
            "type": "object",
            "class": "Promise",
            "promiseState": {
                "state": "fulfilled",
                "value": {
                    "type": "object",
                    "class": "Array",
                    "preview": { "kind": "ArrayLike", "length": 2, "items": [1, 2] },
                },
            },
        }));
        let payload = grip.children();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].children(), vec![&Grip::Number(1.0), &Grip::Number(2.0)]);
    }
}
