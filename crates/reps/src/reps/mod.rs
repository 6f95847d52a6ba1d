//! Built-in reps, one per value shape.
//!
//! Reps never refer to each other: anything nested is rendered through
//! [`RenderCx::render_child`](crate::context::RenderCx::render_child), which
//! goes back to the selector.

use crate::context::{ELLIPSIS, RenderCx};
use crate::registry::Rep;
use indextree::NodeId;

mod array;
mod error;
mod fallback;
mod map;
mod misc;
mod node;
mod object;
mod primitives;
mod promise;
mod string;

pub use array::GripArrayRep;
pub use error::ErrorRep;
pub use fallback::FallbackRep;
pub use map::GripMapRep;
pub use misc::{DateTimeRep, FunctionRep, ObjectWithTextRep, ObjectWithUrlRep, RegExpRep};
pub use node::{CommentNodeRep, ElementNodeRep, TextNodeRep};
pub use object::GripRep;
pub use primitives::{InfinityRep, NaNRep, NullRep, NumberRep, SymbolRep, UndefinedRep};
pub use promise::PromiseRep;
pub use string::{LongStringRep, StringRep};

/// Built-in reps in priority order. Specific shapes come before the generic
/// object rep; [`FallbackRep`] is appended by the registry.
pub fn default_reps() -> Vec<Box<dyn Rep>> {
    vec![
        Box::new(RegExpRep),
        Box::new(DateTimeRep),
        Box::new(ElementNodeRep),
        Box::new(TextNodeRep),
        Box::new(CommentNodeRep),
        Box::new(LongStringRep),
        Box::new(FunctionRep),
        Box::new(PromiseRep),
        Box::new(ObjectWithTextRep),
        Box::new(ObjectWithUrlRep),
        Box::new(ErrorRep),
        Box::new(GripArrayRep),
        Box::new(GripMapRep),
        Box::new(GripRep),
        Box::new(UndefinedRep),
        Box::new(NullRep),
        Box::new(StringRep),
        Box::new(NumberRep),
        Box::new(SymbolRep),
        Box::new(InfinityRep),
        Box::new(NaNRep),
    ]
}

// -----------------------
// Shared helpers
// -----------------------

/// Quote `text` the way string values are displayed.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
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
    out.push('"');
    out
}

/// Cut the middle out of `text` so that it fits in `limit` UTF-16 code units.
pub(crate) fn crop(text: &str, limit: usize) -> String {
    let len = text.encode_utf16().count();
    if limit < 3 || len <= limit {
        return text.to_owned();
    }
    let half = (limit - 2) / 2;
    let head = take_units(text.chars(), half);
    let tail: String = take_units(text.chars().rev(), half).chars().rev().collect();
    format!("{head}{ELLIPSIS}{tail}")
}

/// Leading characters of `chars` that fit in `units` UTF-16 code units.
/// Surrogate pairs are never split.
fn take_units(chars: impl Iterator<Item = char>, units: usize) -> String {
    let mut used = 0;
    chars
        .take_while(|ch| {
            used += ch.len_utf16();
            used <= units
        })
        .collect()
}

/// Detached `objectBox` span that holds one rep.
pub(crate) fn object_box(cx: &mut RenderCx<'_>, kind: &str) -> NodeId {
    cx.tree().new_span(format!("objectBox objectBox-{kind}"))
}

/// Append a `N more…` caption for children that were not shown.
pub(crate) fn more_caption(cx: &mut RenderCx<'_>, parent: NodeId, hidden: usize) {
    let tree = cx.tree();
    let caption = tree.append_span(parent, "more-ellipsis");
    tree.append_text(caption, format!("{hidden} more{ELLIPSIS}"));
}
