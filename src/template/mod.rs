//! Placeholder templates rendered from a [`VariableSource`].
//!
//! A template is plain text containing `${NAME}` markers. Rendering replaces
//! each marker with the variable's value byte for byte: nothing is escaped or
//! validated, so the caller decides whether the result is acceptable.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::environment::VariableSource;
use crate::errors::{GeneratorError, GeneratorResult};

pub mod builtin;

pub use builtin::TemplateVariant;

const OPEN: &str = "${";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder pattern is valid"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("name pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// A parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Splits `text` into literal runs and placeholders.
    ///
    /// A `$` that is not followed by `{` is ordinary text. An opening `${`
    /// without a closing `}`, or a name outside `[A-Za-z0-9_]+`, is rejected
    /// with the byte offset of the offending `${`.
    pub fn parse(text: &str) -> GeneratorResult<Self> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            push_literal(&mut segments, text, last, whole.start())?;

            if !NAME.is_match(name.as_str()) {
                return Err(GeneratorError::InvalidTemplate {
                    offset: whole.start(),
                    reason: format!("invalid placeholder name `{}`", name.as_str()),
                });
            }
            segments.push(Segment::Variable(name.as_str().to_string()));
            last = whole.end();
        }

        push_literal(&mut segments, text, last, text.len())?;

        Ok(Self { segments })
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Variable(name) = segment
                && !names.contains(&name.as_str())
            {
                names.push(name);
            }
        }
        names
    }

    /// Substitutes every placeholder with its value from `source`.
    ///
    /// All variables are looked up before any output is produced. If one or
    /// more are absent the error names all of them.
    pub fn render<S>(&self, source: &S) -> GeneratorResult<String>
    where
        S: VariableSource + ?Sized,
    {
        let mut values: HashMap<&str, String> = HashMap::new();
        let mut missing = Vec::new();

        for name in self.variables() {
            match source.get(name) {
                Some(value) => {
                    values.insert(name, value);
                }
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(GeneratorError::MissingVariables(missing));
        }

        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Variable(name) => {
                    if let Some(value) = values.get(name.as_str()) {
                        rendered.push_str(value);
                    }
                }
            }
        }
        Ok(rendered)
    }
}

/// Appends `text[start..end]` as literal text. Any `${` left in it never
/// found its closing brace.
fn push_literal(
    segments: &mut Vec<Segment>,
    text: &str,
    start: usize,
    end: usize,
) -> GeneratorResult<()> {
    let literal = &text[start..end];
    if let Some(open) = literal.find(OPEN) {
        return Err(GeneratorError::InvalidTemplate {
            offset: start + open,
            reason: "unterminated placeholder".to_string(),
        });
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal.to_string()));
    }
    Ok(())
}
