//! The plain-text facade: formats over flat string [`Segments`].
//!
//! This is the simplest concrete shape, for message-template uses where a
//! rendered value is one run of text and a template is the same run with
//! `\(label)` placeholders where the slots are.
//!
//! [`Segments`]: ../../weft_core/tokens/premade/struct.Segments.html

use weft_core::format::{self, Builder0};
use weft_core::iso::PartialIso;
use weft_core::parser::{self, Parser};
use weft_core::tokens::premade::Segments;


/// A whole-input format over plain string segments.
pub type Format<A> = weft_core::Format<Segments, A>;


/// Start describing a plain-text format.
pub fn build() -> Builder0<Segments> {
    format::build()
}

/// A piece matching exactly the given text as one segment.
pub fn lit(text: &str) -> Parser<Segments, ()> {
    parser::literal(text)
}

/// A typed placeholder taking one segment through the given isomorphism.
pub fn slot<A>(f: PartialIso<String, A>) -> Parser<Segments, A>
    where A: 'static,
{
    parser::slot(f)
}


#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::iso::premade::{int, string};

    fn seg(parts: &[&str]) -> Segments {
        Segments::from_parts(parts.iter().copied())
    }

    #[test]
    fn greeting_round_trip() {
        let f = build().literal("Hello, ").slot(string()).literal("!").finish();
        assert_eq!(f.parse(seg(&["Hello, ", "playground", "!"])),
                   Ok(Some("playground".to_string())));
        assert_eq!(f.render(&"playground".to_string()),
                   Ok(Some("Hello, playground!".to_string())));
        assert_eq!(f.template_for(&"playground".to_string()),
                   Ok(Some(r"Hello, \(string)!".to_string())));
    }

    #[test]
    fn pieces_compose_with_the_builder() {
        let f = build()
            .skip(lit("["))
            .append(slot(int()))
            .skip(lit("]"))
            .finish();
        assert_eq!(f.parse(seg(&["[", "7", "]"])), Ok(Some(7)));
        assert_eq!(f.render(&7), Ok(Some("[7]".to_string())));
    }
}
