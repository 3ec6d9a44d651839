//! The core of a bidirectional format engine where a single declarative
//! description of a format drives three modes at once: parsing a structured
//! value out of a token sequence, printing a value back into one, and
//! rendering a fill-in documentation template for it.  Because one
//! description serves all three, the parsing and printing of a format cannot
//! drift apart the way separately-maintained implementations do.
//!
//! Descriptions are assembled from typed pieces.  The foundation is the
//! [partial isomorphism](iso/struct.PartialIso.html): a two-way,
//! possibly-failing mapping between value types.  On top of that,
//! [parsers](parser/struct.Parser.html) pair a way to consume tokens with
//! the ways to emit them, and combine by sequencing, alternation, and
//! mapping.  A [format](format/struct.Format.html) closes a parser over
//! whole inputs, and [builders](format/fn.build.html) assemble the common
//! literal-and-slot shapes without manual tuple bookkeeping.
//!
//! Every operation shares one outcome type,
//! [`Partial`](error/type.Partial.html), which distinguishes a match, a
//! recoverable structural mismatch, and a failure of an underlying
//! conversion.  Alternation recovers mismatches and propagates failures.
//!
//! This core crate is generic over the [token shape](tokens/trait.Tokens.html):
//! any monoid of tokens will do, and linear shapes additionally get the
//! generic literal/slot primitives.  The full `weft` crate builds concrete
//! facades (plain text, URLs, command-line arguments, localized templates)
//! on these pieces.  Everything here is immutable once constructed and
//! `Send + Sync`; there is no global state, so independent formats never
//! interfere.

#![forbid(unsafe_code)]

pub mod error;
pub mod tokens;
pub mod iso;
pub mod tuple;
pub mod parser;
pub mod format;

pub use self::{
    error::{ConvertError, Partial},
    format::{build, Format},
    iso::PartialIso,
    parser::Parser,
    tokens::{LinearTokens, Tokens},
};
