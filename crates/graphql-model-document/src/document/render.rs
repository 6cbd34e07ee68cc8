use std::fmt::{Error, Write};

use itertools::Itertools;

use super::{Document, Selection, SelectionSet};
use crate::naming::TYPENAME_FIELD;

macro_rules! indent_write {
    ($dst:ident, $($arg:tt)*) => {{
        $dst.write_indent();
        write!($dst, $($arg)*)
    }};
}

/// Renders `<kind> <Name>($var: Type, ...) {\n  <name>(var: $var, ...) {\n ... }\n}`.
///
/// Variable definitions and field arguments follow the registration order of the inputs, an
/// argument always has the name of the variable it is bound to.
pub(super) fn render(document: &Document) -> Result<String, Error> {
    let mut buffer = Buffer::with_capacity(256);

    write!(buffer, "{} {}", document.operation_type, document.operation_name())?;
    if !document.inputs.is_empty() {
        write!(
            buffer,
            "({})",
            document
                .inputs
                .iter()
                .format_with(", ", |(name, input), f| f(&format_args!("${name}: {}", input.ty())))
        )?;
    }
    buffer.push_str(" {\n");
    buffer.indent += 1;

    indent_write!(buffer, "{}", document.name)?;
    if !document.inputs.is_empty() {
        write!(
            buffer,
            "({})",
            document
                .inputs
                .names()
                .format_with(", ", |name, f| f(&format_args!("{name}: ${name}")))
        )?;
    }

    match &document.selection_set {
        Some(selection_set) => write_selection_set(&mut buffer, selection_set)?,
        None => buffer.push('\n'),
    }

    buffer.indent -= 1;
    buffer.push('}');

    Ok(buffer.into_string())
}

fn write_selection_set(buffer: &mut Buffer, selection_set: &SelectionSet) -> Result<(), Error> {
    buffer.push_str(" {\n");
    buffer.indent += 1;

    // An empty selection set is not valid GraphQL.
    if selection_set.is_empty() {
        indent_write!(buffer, "{TYPENAME_FIELD}\n")?;
    }

    for selection in selection_set.iter() {
        match selection {
            Selection::Field(name) => indent_write!(buffer, "{name}\n")?,
            Selection::Object { name, selection_set } => {
                indent_write!(buffer, "{name}")?;
                write_selection_set(buffer, selection_set)?;
            }
        }
    }

    buffer.indent -= 1;
    indent_write!(buffer, "}}\n")
}

struct Buffer {
    inner: String,
    indent: usize,
}

impl std::ops::Deref for Buffer {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Buffer {
    fn with_capacity(capacity: usize) -> Self {
        Buffer {
            inner: String::with_capacity(capacity),
            indent: 0,
        }
    }

    fn into_string(self) -> String {
        self.inner
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.inner.push_str("  ");
        }
    }
}
