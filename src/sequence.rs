//! Emptiness checks and diagnostic printing for sequences.
//!
//! A nullable sequence is modeled as `Option<I>`. Emptiness is decided by
//! probing at most the first element, so a non-replayable iterator still
//! answers correctly. Rendering is kept separate from writing: the renderer
//! is pure and testable, the printers push lines into a sink.

use crate::fields::is_scalar;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// The fixed line emitted when asked to print a null sequence.
pub const NULL_SEQUENCE_MESSAGE: &str = "Enumerable is null";

/// Emptiness probes for a sequence by value.
///
/// The blanket impl covers every `IntoIterator`, including `Option<I>`,
/// whose iterator yields the inner value as a single element — so
/// `Some(vec![]).is_empty_seq()` is `false`. Nullable sequences go through
/// the free [`is_empty`]/[`is_not_empty`] functions instead, which treat
/// `None` as the null sequence and probe the inner sequence's elements.
pub trait SequenceExt: IntoIterator + Sized {
    /// True iff the sequence yields no first element. Consumes at most one
    /// element of the underlying iterator.
    fn is_empty_seq(self) -> bool {
        self.into_iter().next().is_none()
    }

    /// Exact logical negation of [`SequenceExt::is_empty_seq`].
    fn is_not_empty_seq(self) -> bool {
        !self.is_empty_seq()
    }
}

impl<I: IntoIterator> SequenceExt for I {}

/// True for a null sequence and for any sequence with no first element.
pub fn is_empty<I: IntoIterator>(sequence: Option<I>) -> bool {
    match sequence {
        None => true,
        Some(seq) => seq.into_iter().next().is_none(),
    }
}

/// Exact logical negation of [`is_empty`].
pub fn is_not_empty<I: IntoIterator>(sequence: Option<I>) -> bool {
    !is_empty(sequence)
}

/// Render the contents of a sequence as diagnostic lines.
///
/// A null sequence renders as the single fixed line
/// [`NULL_SEQUENCE_MESSAGE`]. A null element renders as `null`, a scalar
/// element as its textual form, and a structured element as one
/// `name: value` line per field in declaration order. An element the codec
/// cannot encode also renders as the `null` placeholder; this printer does
/// not distinguish codec failures from absent elements. Output is
/// diagnostic text with no machine-parseable structure.
pub fn render_contents<I>(sequence: Option<I>) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let Some(sequence) = sequence else {
        return vec![NULL_SEQUENCE_MESSAGE.to_string()];
    };

    let mut lines = Vec::new();
    for item in sequence {
        let encoded = serde_json::to_value(&item).unwrap_or(Value::Null);
        match encoded {
            Value::Null => lines.push("null".to_string()),
            ref scalar if is_scalar(scalar) => lines.push(render_value(scalar)),
            Value::Object(map) => {
                for (name, value) in map {
                    lines.push(format!("{name}: {}", render_value(&value)));
                }
            }
            // Nested sequences have no named fields; show their JSON text.
            other => lines.push(other.to_string()),
        }
    }
    lines
}

/// Print the rendered contents of a sequence to standard output.
pub fn print_contents<I>(sequence: Option<I>)
where
    I: IntoIterator,
    I::Item: Serialize,
{
    for line in render_contents(sequence) {
        println!("{line}");
    }
}

/// Print the rendered contents of a sequence to the given sink.
///
/// # Errors
///
/// Propagates any write failure from the sink.
pub fn print_contents_to<I, W>(sequence: Option<I>, sink: &mut W) -> std::io::Result<()>
where
    I: IntoIterator,
    I::Item: Serialize,
    W: Write,
{
    for line in render_contents(sequence) {
        writeln!(sink, "{line}")?;
    }
    Ok(())
}

// Field values print bare: strings unquoted, null as empty text.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
