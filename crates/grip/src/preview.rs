//! Object previews and promise state carried by object grips.

use crate::Grip;

/// `Node.nodeType` values the reps care about.
pub mod node_type {
    pub const ELEMENT: u16 = 1;
    pub const TEXT: u16 = 3;
    pub const COMMENT: u16 = 8;
}

/// Preview attached to an object grip, discriminated by the protocol `kind`.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    /// Arrays, typed arrays, `NodeList`s and other indexed collections.
    ArrayLike { length: usize, items: Option<Vec<Grip>> },
    /// Plain objects with a sample of their own properties.
    Object {
        own_properties: Vec<(String, PropertyDescriptor)>,
        own_properties_length: usize,
    },
    /// `Map`, `WeakMap` and friends.
    MapLike { size: usize, entries: Vec<(Grip, Grip)> },
    DomNode(NodePreview),
    Error(ErrorPreview),
    /// Objects best described by a single string, e.g. CSS rules.
    ObjectWithText { text: String },
    /// Objects best described by a URL, e.g. `Location` or `Window`.
    ObjectWithUrl { url: String },
    /// Date preview. `None` means the date is invalid.
    Date { timestamp: Option<f64> },
    /// A preview kind this crate does not know.
    Other { kind: Option<String> },
}

/// Own property of a previewed object.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyDescriptor {
    Value(Grip),
    Accessor { getter: Option<Grip>, setter: Option<Grip> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodePreview {
    pub node_type: u16,
    pub node_name: String,
    /// Whether the node is attached to its document.
    pub is_connected: bool,
    pub attributes: Vec<(String, String)>,
    pub text_content: Option<String>,
}

impl NodePreview {
    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ErrorPreview {
    pub name: String,
    pub message: String,
    pub stack: Option<String>,
}

/// Settlement state of a promise.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PromiseStatus {
    Pending,
    Fulfilled,
    Rejected,
}

impl PromiseStatus {
    /// The protocol's state word.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "pending" => Some(Self::Pending),
            "fulfilled" => Some(Self::Fulfilled),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromiseState {
    pub status: PromiseStatus,
    pub value: Option<Box<Grip>>,
    pub reason: Option<Box<Grip>>,
}

impl PromiseState {
    /// Labeled payload of the promise, if settled with one: `("value", v)` or
    /// `("reason", r)`.
    pub fn payload(&self) -> Option<(&'static str, &Grip)> {
        if let Some(value) = &self.value {
            return Some(("value", value));
        }
        self.reason.as_deref().map(|reason| ("reason", reason))
    }
}

/// Extra data of `Function` grips.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FunctionInfo {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub user_display_name: Option<String>,
    pub parameter_names: Vec<String>,
}

impl FunctionInfo {
    /// The most descriptive name available, or an empty string for anonymous functions.
    pub fn best_name(&self) -> &str {
        self.user_display_name
            .as_deref()
            .or(self.display_name.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("")
    }
}
