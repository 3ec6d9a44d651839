//! The plain-segments token shape.

use std::fmt::{self, Display};

use crate::tokens::{LinearTokens, Tokens};


/// The plain textual template shape: an ordered list of literal and
/// placeholder string segments.  Rendering is simply their concatenation.
///
/// This is the shape scenario-style string formats are built over, and the
/// simplest instance of [`Tokens`](../trait.Tokens.html).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Segments {
    parts: Vec<String>,
}

impl Segments {
    /// Make one from anything yielding string-ish parts, in order.
    pub fn from_parts<I>(parts: I) -> Self
        where I: IntoIterator,
              I::Item: Into<String>,
    {
        Segments { parts: parts.into_iter().map(Into::into).collect() }
    }

    /// Borrow the underlying parts.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl Tokens for Segments {
    fn empty() -> Self {
        Segments { parts: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn concat(mut self, other: Self) -> Self {
        self.parts.extend(other.parts);
        self
    }
}

impl LinearTokens for Segments {
    fn split_first(mut self) -> Option<(String, Self)> {
        if self.parts.is_empty() {
            None
        } else {
            let head = self.parts.remove(0);
            Some((head, self))
        }
    }

    fn from_token(token: String) -> Self {
        Segments { parts: vec![token] }
    }

    fn slot_placeholder(label: &str) -> String {
        format!(r"\({})", label)
    }
}

impl Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.concat())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render() {
        assert_eq!(Segments::empty().to_string(), "");
        assert_eq!(Segments::from_parts(["Hello, ", "playground", "."]).to_string(),
                   "Hello, playground.");
    }

    #[test]
    fn parts_order_preserved() {
        let s = Segments::from_parts(["a"]).concat(Segments::from_parts(["b", "c"]));
        assert_eq!(s.parts(), ["a", "b", "c"]);
    }
}
