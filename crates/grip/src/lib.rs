//! Grips: serializable descriptors of debuggee values.
//!
//! A grip stands in for a live reference into the debuggee. Grips are produced
//! by the remote debugging transport as JSON and are read-only from here on;
//! this crate only models them and offers a few queries over the model.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod actor;
mod parse;
pub mod preview;

pub use actor::ActorId;
pub use preview::{
    ErrorPreview, FunctionInfo, NodePreview, Preview, PromiseState, PromiseStatus,
    PropertyDescriptor, node_type,
};

/// An engine-agnostic description of a debuggee value.
#[derive(Clone, Debug, PartialEq)]
pub enum Grip {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    NegativeZero,
    NaN,
    Infinity,
    NegativeInfinity,
    String(String),
    Symbol { name: Option<String> },
    /// A string too long to be sent whole; only `initial` is available.
    LongString(LongString),
    Object(Box<ObjectGrip>),
    /// Anything with a `type` this crate does not recognize.
    Unknown { type_name: Option<String>, raw: Value },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LongString {
    pub initial: String,
    pub length: usize,
    /// Token used to fetch the full text.
    pub actor: Option<ActorId>,
}

impl LongString {
    /// Whether `initial` is shorter than the full string. `length` counts
    /// UTF-16 code units.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.initial.encode_utf16().count() < self.length
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectGrip {
    pub actor: Option<ActorId>,
    pub class: String,
    pub own_property_length: Option<usize>,
    pub preview: Option<Preview>,
    pub promise_state: Option<PromiseState>,
    /// Source form of regular expressions.
    pub display_string: Option<String>,
    pub function: Option<FunctionInfo>,
}

impl ObjectGrip {
    /// Bare object grip of the given class, without preview.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            actor: None,
            class: class.into(),
            own_property_length: None,
            preview: None,
            promise_state: None,
            display_string: None,
            function: None,
        }
    }

    #[inline]
    pub fn node_preview(&self) -> Option<&NodePreview> {
        match &self.preview {
            Some(Preview::DomNode(node)) => Some(node),
            _ => None,
        }
    }
}

impl Grip {
    /// Build a grip from its protocol JSON. Never fails: shapes that are not
    /// understood become [`Grip::Unknown`].
    #[inline]
    pub fn from_json(value: &Value) -> Self {
        parse::grip_from_json(value)
    }

    /// Parse a grip from JSON text.
    ///
    /// # Errors
    /// Returns an error if `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }

    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    #[inline]
    pub fn object(&self) -> Option<&ObjectGrip> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Class of object grips.
    #[inline]
    pub fn class(&self) -> Option<&str> {
        self.object().map(|object| object.class.as_str())
    }

    #[inline]
    pub fn preview(&self) -> Option<&Preview> {
        self.object().and_then(|object| object.preview.as_ref())
    }

    #[inline]
    pub fn actor(&self) -> Option<&ActorId> {
        match self {
            Self::Object(object) => object.actor.as_ref(),
            Self::LongString(long) => long.actor.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub fn node_preview(&self) -> Option<&NodePreview> {
        self.object().and_then(ObjectGrip::node_preview)
    }

    /// Whether this grip is a DOM node attached to its document.
    pub fn is_connected_node(&self) -> bool {
        self.node_preview().is_some_and(|node| node.is_connected)
    }

    /// Protocol type word of this grip, as used for display of unknown shapes.
    pub fn type_label(&self) -> &str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) | Self::NegativeZero => "number",
            Self::NaN => "NaN",
            Self::Infinity => "Infinity",
            Self::NegativeInfinity => "-Infinity",
            Self::String(_) => "string",
            Self::Symbol { .. } => "symbol",
            Self::LongString(_) => "longString",
            Self::Object(object) => &object.class,
            Self::Unknown { type_name, .. } => type_name.as_deref().unwrap_or("unknown"),
        }
    }

    /// Grips embedded directly in this one, in display order.
    pub fn children(&self) -> Vec<&Self> {
        let Some(object) = self.object() else {
            return Vec::new();
        };
        let mut children = Vec::new();
        if let Some(state) = &object.promise_state
            && let Some((_, payload)) = state.payload()
        {
            children.push(payload);
        }
        match &object.preview {
            Some(Preview::ArrayLike { items: Some(items), .. }) => children.extend(items.iter()),
            Some(Preview::Object { own_properties, .. }) => {
                for (_, descriptor) in own_properties {
                    match descriptor {
                        PropertyDescriptor::Value(value) => children.push(value),
                        PropertyDescriptor::Accessor { getter, setter } => {
                            children.extend(getter.iter().chain(setter.iter()));
                        }
                    }
                }
            }
            Some(Preview::MapLike { entries, .. }) => {
                for (key, value) in entries {
                    children.push(key);
                    children.push(value);
                }
            }
            _ => {}
        }
        children
    }
}

impl<'de> Deserialize<'de> for Grip {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl From<&str> for Grip {
    #[inline]
    fn from(text: &str) -> Self {
        Self::string(text)
    }
}

impl From<f64> for Grip {
    /// Values the protocol sends as tagged grips (`NaN`, the infinities
    /// and `-0`) map to their own variants.
    fn from(number: f64) -> Self {
        if number.is_nan() {
            Self::NaN
        } else if number.is_infinite() {
            if number > 0.0 {
                Self::Infinity
            } else {
                Self::NegativeInfinity
            }
        } else if number == 0.0 && number.is_sign_negative() {
            Self::NegativeZero
        } else {
            Self::Number(number)
        }
    }
}

impl From<bool> for Grip {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::{Grip, LongString};

    #[test]
    fn non_finite_numbers_become_tagged_grips() {
        assert_eq!(Grip::from(f64::INFINITY), Grip::Infinity);
        assert_eq!(Grip::from(f64::NEG_INFINITY), Grip::NegativeInfinity);
        assert_eq!(Grip::from(f64::NAN), Grip::NaN);
        assert_eq!(Grip::from(-0.0), Grip::NegativeZero);
        assert_eq!(Grip::from(2.5), Grip::Number(2.5));
    }

    #[test]
    fn long_string_length_counts_utf16_units() {
        let complete = LongString {
            initial: String::from("\u{1F600}\u{1F600}"),
            length: 4,
            actor: None,
        };
        assert!(!complete.is_truncated());

        let partial = LongString {
            length: 5,
            ..complete
        };
        assert!(partial.is_truncated());
    }
}
