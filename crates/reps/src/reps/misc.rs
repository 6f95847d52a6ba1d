//! Reps for objects best shown as a single line of text.

use super::{object_box, quote};
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use chrono::{DateTime, SecondsFormat};
use grip::{Grip, Preview};
use indextree::NodeId;

pub struct RegExpRep;

impl Rep for RegExpRep {
    fn name(&self) -> &'static str {
        "RegExp"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(grip.class() == Some("RegExp"))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "regexp");
        let source = grip
            .object()
            .and_then(|object| object.display_string.as_deref())
            .unwrap_or("/(?:)/");
        cx.object_link(span, grip, "regexpSource", source);
        span
    }
}

/// ISO-8601 form of a millisecond timestamp, as `Date.prototype.toISOString`
/// prints it.
fn iso_timestamp(timestamp: Option<f64>) -> Option<String> {
    let millis = timestamp.filter(|millis| millis.is_finite())?;
    DateTime::from_timestamp_millis(millis.trunc() as i64)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub struct DateTimeRep;

impl Rep for DateTimeRep {
    fn name(&self) -> &'static str {
        "DateTime"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        if grip.class() != Some("Date") {
            return Ok(false);
        }
        match grip.preview() {
            Some(Preview::Date { .. }) => Ok(true),
            _ => Err(RepError::MalformedGrip(String::from(
                "Date grip without a timestamp preview",
            ))),
        }
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "object");
        let timestamp = match grip.preview() {
            Some(Preview::Date { timestamp }) => *timestamp,
            _ => None,
        };
        match iso_timestamp(timestamp) {
            Some(date) => {
                cx.object_link(span, grip, "objectTitle", "Date");
                cx.tree().append_text(span, format!(" {date}"));
            }
            None => cx.object_link(span, grip, "objectTitle", "Invalid Date"),
        }
        span
    }
}

/// Functions: `function foo(a, b)`, or `foo()` in tiny mode.
pub struct FunctionRep;

impl Rep for FunctionRep {
    fn name(&self) -> &'static str {
        "Function"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(grip.class() == Some("Function"))
    }

    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, "function");
        let function = grip.object().and_then(|object| object.function.as_ref());
        let name = function.map_or("", |info| info.best_name());
        if mode.is_tiny() {
            cx.tree().append_text(span, format!("{name}()"));
            return span;
        }
        let params = function.map_or_else(String::new, |info| info.parameter_names.join(", "));
        cx.object_link(span, grip, "objectTitle", "function ");
        cx.tree().append_text(span, format!("{name}({params})"));
        span
    }
}

/// Objects described by a text, e.g. `CSSStyleRule "div.warning"`.
pub struct ObjectWithTextRep;

impl Rep for ObjectWithTextRep {
    fn name(&self) -> &'static str {
        "ObjectWithText"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip.preview(), Some(Preview::ObjectWithText { .. })))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, grip.class().unwrap_or("object"));
        let text = match grip.preview() {
            Some(Preview::ObjectWithText { text }) => text.as_str(),
            _ => "",
        };
        cx.object_link(span, grip, "objectTitle", grip.type_label());
        cx.tree().append_text(span, " ");
        let value = cx.tree().append_span(span, "objectPropValue");
        cx.tree().append_text(value, quote(text));
        span
    }
}

/// Objects described by a URL, e.g. `Location https://example.com/`.
pub struct ObjectWithUrlRep;

impl Rep for ObjectWithUrlRep {
    fn name(&self) -> &'static str {
        "ObjectWithURL"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip.preview(), Some(Preview::ObjectWithUrl { .. })))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let span = object_box(cx, grip.class().unwrap_or("object"));
        let url = match grip.preview() {
            Some(Preview::ObjectWithUrl { url }) => url.as_str(),
            _ => "",
        };
        cx.object_link(span, grip, "objectTitle", grip.type_label());
        cx.tree().append_text(span, " ");
        let value = cx.tree().append_span(span, "objectPropValue");
        cx.tree().append_text(value, url);
        span
    }
}

#[cfg(test)]
mod tests {
    use super::iso_timestamp;

    #[test]
    fn timestamps_print_like_to_iso_string() {
        assert_eq!(
            iso_timestamp(Some(1_459_372_644_859.0)).as_deref(),
            Some("2016-03-30T21:17:24.859Z")
        );
    }

    #[test]
    fn missing_or_non_finite_timestamps_are_invalid() {
        assert_eq!(iso_timestamp(None), None);
        assert_eq!(iso_timestamp(Some(f64::NAN)), None);
    }
}
