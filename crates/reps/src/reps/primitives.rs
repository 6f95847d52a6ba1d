//! Reps for primitive values without structure.

use super::object_box;
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::registry::Rep;
use grip::Grip;
use indextree::NodeId;

fn literal(cx: &mut RenderCx<'_>, kind: &str, text: &str) -> NodeId {
    let span = object_box(cx, kind);
    cx.tree().append_text(span, text);
    span
}

/// Display form of a number, following JavaScript's `Number.prototype.toString`.
///
/// Negative zero keeps its sign so it can be told apart from `0`.
fn format_number(number: f64) -> String {
    if number.is_nan() {
        return String::from("NaN");
    }
    if number.is_infinite() {
        let sign = if number < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if number == 0.0 {
        let sign = if number.is_sign_negative() { "-" } else { "" };
        return format!("{sign}0");
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. `1.2345e2`.
    let scientific = format!("{:e}", number.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let sign = if number < 0.0 { "-" } else { "" };
    let count = i32::try_from(digits.len()).unwrap_or(i32::MAX);
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if (count..=21).contains(&point) {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if (1..=21).contains(&point) {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if (-5..=0).contains(&point) {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", exponent.abs())
        }
    };
    format!("{sign}{body}")
}

pub struct UndefinedRep;

impl Rep for UndefinedRep {
    fn name(&self) -> &'static str {
        "Undefined"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::Undefined))
    }

    fn render(&self, _grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        literal(cx, "undefined", "undefined")
    }
}

pub struct NullRep;

impl Rep for NullRep {
    fn name(&self) -> &'static str {
        "Null"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::Null))
    }

    fn render(&self, _grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        literal(cx, "null", "null")
    }
}

/// Numbers, booleans and negative zero.
pub struct NumberRep;

impl Rep for NumberRep {
    fn name(&self) -> &'static str {
        "Number"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(
            grip,
            Grip::Number(_) | Grip::Bool(_) | Grip::NegativeZero
        ))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let text = match grip {
            Grip::Bool(flag) => flag.to_string(),
            Grip::Number(number) => format_number(*number),
            _ => String::from("-0"),
        };
        literal(cx, "number", &text)
    }
}

pub struct SymbolRep;

impl Rep for SymbolRep {
    fn name(&self) -> &'static str {
        "Symbol"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::Symbol { .. }))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let name = match grip {
            Grip::Symbol { name: Some(name) } => name.as_str(),
            _ => "",
        };
        literal(cx, "symbol", &format!("Symbol({name})"))
    }
}

pub struct InfinityRep;

impl Rep for InfinityRep {
    fn name(&self) -> &'static str {
        "Infinity"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::Infinity | Grip::NegativeInfinity))
    }

    fn render(&self, grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        let text = if matches!(grip, Grip::NegativeInfinity) {
            "-Infinity"
        } else {
            "Infinity"
        };
        literal(cx, "number", text)
    }
}

pub struct NaNRep;

impl Rep for NaNRep {
    fn name(&self) -> &'static str {
        "NaN"
    }

    fn supports(&self, grip: &Grip) -> Result<bool, RepError> {
        Ok(matches!(grip, Grip::NaN))
    }

    fn render(&self, _grip: &Grip, _mode: Mode, cx: &mut RenderCx<'_>) -> NodeId {
        literal(cx, "nan", "NaN")
    }
}
