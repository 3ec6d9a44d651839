//! The facade that turns a [`Parser`] into a whole-input format, and the
//! builders that assemble parsers without manual tuple bookkeeping.
//!
//! [`Parser`]: ../parser/struct.Parser.html

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use crate::error::Partial;
use crate::iso::PartialIso;
use crate::parser::{self, Parser};
use crate::tokens::{LinearTokens, Tokens};
use crate::tuple;


/// A complete bidirectional format for values of `A` over the token shape
/// `T`: parsing requires the whole input to match, printing and templating
/// pass through to the underlying parser.
///
/// The end-anchored variant of the parser is made once, here, so repeated
/// [`parse`](#method.parse) calls do not rebuild it.
pub struct Format<T, A> {
    parser: Parser<T, A>,
    anchored: Parser<T, A>,
}

impl<T, A> Format<T, A>
    where T: Tokens + 'static,
          A: 'static,
{
    /// Wrap a parser as a whole-input format.
    pub fn new(parser: Parser<T, A>) -> Self {
        let anchored = parser.clone().skipping_right(parser::end());
        Format { parser, anchored }
    }

    /// The underlying parser, for embedding this format as a piece of a
    /// larger one.
    pub fn parser(&self) -> &Parser<T, A> {
        &self.parser
    }

    /// Parse `input` in full.  Unlike [`Parser::parse`], trailing tokens
    /// are a mismatch, and no remainder is returned.
    ///
    /// [`Parser::parse`]: ../parser/struct.Parser.html#method.parse
    pub fn parse(&self, input: T) -> Partial<A> {
        Ok(self.anchored.parse(input)?.map(|(_, value)| value))
    }

    /// Print `value` and render the tokens to text.
    pub fn render(&self, value: &A) -> Partial<String>
        where T: fmt::Display,
    {
        Ok(self.parser.print(value)?.map(|tokens| tokens.to_string()))
    }

    /// Like [`render`](#method.render), but slots substitute their semantic
    /// type name, giving the documentation form of the format branch that
    /// `value` takes.
    pub fn template_for(&self, value: &A) -> Partial<String>
        where T: fmt::Display,
    {
        Ok(self.parser.template(value)?.map(|tokens| tokens.to_string()))
    }

    /// Convert the value type through a [`PartialIso`].
    ///
    /// [`PartialIso`]: ../iso/struct.PartialIso.html
    pub fn map<B>(self, f: PartialIso<A, B>) -> Format<T, B>
        where B: 'static,
    {
        Format::new(self.parser.map(f))
    }

    /// Left-biased choice between two formats of the same value type.
    pub fn or_else(self, other: Format<T, A>) -> Format<T, A>
        where T: Clone,
    {
        Format::new(self.parser.or_else(other.parser))
    }

    /// The format that matches nothing.
    pub fn empty() -> Self {
        Format::new(Parser::empty())
    }
}

impl<T, A> Clone for Format<T, A> {
    fn clone(&self) -> Self {
        Format {
            parser: self.parser.clone(),
            anchored: self.anchored.clone(),
        }
    }
}

impl<T, A> fmt::Debug for Format<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format").finish_non_exhaustive()
    }
}


/// Start describing a format.  Pieces accumulate left to right:
/// [`append`](struct.Builder0.html#method.append) keeps a piece's value,
/// [`skip`](struct.Builder0.html#method.skip) consumes its tokens but drops
/// its `()`, and [`finish`](struct.Builder0.html#method.finish) closes the
/// description over the values kept so far.
///
/// Over a linear token shape the [`literal`] and [`slot`] shorthands cover
/// the common pieces.
///
/// [`literal`]: struct.Builder0.html#method.literal
/// [`slot`]: struct.Builder0.html#method.slot
pub fn build<T>() -> Builder0<T>
    where T: Tokens + 'static,
{
    Builder0 { parser: Parser::unit() }
}


/// A format description holding no values yet.
pub struct Builder0<T> {
    parser: Parser<T, ()>,
}

/// A format description holding one value.
pub struct Builder1<T, A> {
    parser: Parser<T, A>,
}

/// A format description holding two values.
pub struct Builder2<T, A, B> {
    parser: Parser<T, (A, B)>,
}

/// A format description holding three values.
pub struct Builder3<T, A, B, C> {
    parser: Parser<T, (A, B, C)>,
}

/// A format description holding four values.
pub struct Builder4<T, A, B, C, D> {
    parser: Parser<T, (A, B, C, D)>,
}

/// A format description holding five values.
// TODO: Widen past five values if a format ever needs it.
pub struct Builder5<T, A, B, C, D, E> {
    parser: Parser<T, (A, B, C, D, E)>,
}

impl<T> Builder0<T>
    where T: Tokens + 'static,
{
    /// Add a piece whose tokens matter but whose value does not.
    pub fn skip(self, piece: Parser<T, ()>) -> Builder0<T> {
        Builder0 { parser: self.parser.skipping_right(piece) }
    }

    /// Add a piece and keep its value.
    pub fn append<A>(self, piece: Parser<T, A>) -> Builder1<T, A>
        where A: 'static,
    {
        Builder1 { parser: self.parser.skipping_left(piece) }
    }

    /// Close the description.  With no values kept, the format just
    /// recognizes its fixed tokens.
    pub fn finish(self) -> Format<T, ()> {
        Format::new(self.parser)
    }
}

impl<T> Builder0<T>
    where T: LinearTokens + 'static,
{
    /// Shorthand for skipping a [`literal`](../parser/fn.literal.html)
    /// piece.
    pub fn literal(self, text: &str) -> Builder0<T> {
        self.skip(parser::literal(text))
    }

    /// Shorthand for appending a [`slot`](../parser/fn.slot.html) piece.
    pub fn slot<A>(self, f: PartialIso<String, A>) -> Builder1<T, A>
        where A: 'static,
    {
        self.append(parser::slot(f))
    }
}

impl<T, A> Builder1<T, A>
    where T: Tokens + 'static,
          A: 'static,
{
    /// As [`Builder0::skip`](struct.Builder0.html#method.skip).
    pub fn skip(self, piece: Parser<T, ()>) -> Builder1<T, A> {
        Builder1 { parser: self.parser.skipping_right(piece) }
    }

    /// As [`Builder0::append`](struct.Builder0.html#method.append).
    pub fn append<B>(self, piece: Parser<T, B>) -> Builder2<T, A, B>
        where B: 'static,
    {
        Builder2 { parser: self.parser.sequence(piece) }
    }

    /// Close the description over the one value kept.
    pub fn finish(self) -> Format<T, A> {
        Format::new(self.parser)
    }
}

impl<T, A> Builder1<T, A>
    where T: LinearTokens + 'static,
          A: 'static,
{
    /// As [`Builder0::literal`](struct.Builder0.html#method.literal).
    pub fn literal(self, text: &str) -> Builder1<T, A> {
        self.skip(parser::literal(text))
    }

    /// As [`Builder0::slot`](struct.Builder0.html#method.slot).
    pub fn slot<B>(self, f: PartialIso<String, B>) -> Builder2<T, A, B>
        where B: 'static,
    {
        self.append(parser::slot(f))
    }
}

impl<T, A, B> Builder2<T, A, B>
    where T: Tokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
{
    /// As [`Builder0::skip`](struct.Builder0.html#method.skip).
    pub fn skip(self, piece: Parser<T, ()>) -> Builder2<T, A, B> {
        Builder2 { parser: self.parser.skipping_right(piece) }
    }

    /// As [`Builder0::append`](struct.Builder0.html#method.append).  From
    /// here on the values kept so far are widened into the next flat tuple.
    pub fn append<C>(self, piece: Parser<T, C>) -> Builder3<T, A, B, C>
        where C: Clone + 'static,
    {
        Builder3 { parser: self.parser.sequence(piece).map(tuple::extend3()) }
    }

    /// Close the description over the pair of values kept.
    pub fn finish(self) -> Format<T, (A, B)> {
        Format::new(self.parser)
    }
}

impl<T, A, B> Builder2<T, A, B>
    where T: LinearTokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
{
    /// As [`Builder0::literal`](struct.Builder0.html#method.literal).
    pub fn literal(self, text: &str) -> Builder2<T, A, B> {
        self.skip(parser::literal(text))
    }

    /// As [`Builder0::slot`](struct.Builder0.html#method.slot).
    pub fn slot<C>(self, f: PartialIso<String, C>) -> Builder3<T, A, B, C>
        where C: Clone + 'static,
    {
        self.append(parser::slot(f))
    }
}

impl<T, A, B, C> Builder3<T, A, B, C>
    where T: Tokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
{
    /// As [`Builder0::skip`](struct.Builder0.html#method.skip).
    pub fn skip(self, piece: Parser<T, ()>) -> Builder3<T, A, B, C> {
        Builder3 { parser: self.parser.skipping_right(piece) }
    }

    /// As [`Builder0::append`](struct.Builder0.html#method.append).
    pub fn append<D>(self, piece: Parser<T, D>) -> Builder4<T, A, B, C, D>
        where D: Clone + 'static,
    {
        Builder4 { parser: self.parser.sequence(piece).map(tuple::extend4()) }
    }

    /// Close the description over the three values kept.
    pub fn finish(self) -> Format<T, (A, B, C)> {
        Format::new(self.parser)
    }
}

impl<T, A, B, C> Builder3<T, A, B, C>
    where T: LinearTokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
{
    /// As [`Builder0::literal`](struct.Builder0.html#method.literal).
    pub fn literal(self, text: &str) -> Builder3<T, A, B, C> {
        self.skip(parser::literal(text))
    }

    /// As [`Builder0::slot`](struct.Builder0.html#method.slot).
    pub fn slot<D>(self, f: PartialIso<String, D>) -> Builder4<T, A, B, C, D>
        where D: Clone + 'static,
    {
        self.append(parser::slot(f))
    }
}

impl<T, A, B, C, D> Builder4<T, A, B, C, D>
    where T: Tokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
{
    /// As [`Builder0::skip`](struct.Builder0.html#method.skip).
    pub fn skip(self, piece: Parser<T, ()>) -> Builder4<T, A, B, C, D> {
        Builder4 { parser: self.parser.skipping_right(piece) }
    }

    /// As [`Builder0::append`](struct.Builder0.html#method.append).
    pub fn append<E>(self, piece: Parser<T, E>)
        -> Builder5<T, A, B, C, D, E>
        where E: Clone + 'static,
    {
        Builder5 { parser: self.parser.sequence(piece).map(tuple::extend5()) }
    }

    /// Close the description over the four values kept.
    pub fn finish(self) -> Format<T, (A, B, C, D)> {
        Format::new(self.parser)
    }
}

impl<T, A, B, C, D> Builder4<T, A, B, C, D>
    where T: LinearTokens + 'static,
          A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
{
    /// As [`Builder0::literal`](struct.Builder0.html#method.literal).
    pub fn literal(self, text: &str) -> Builder4<T, A, B, C, D> {
        self.skip(parser::literal(text))
    }

    /// As [`Builder0::slot`](struct.Builder0.html#method.slot).
    pub fn slot<E>(self, f: PartialIso<String, E>)
        -> Builder5<T, A, B, C, D, E>
        where E: Clone + 'static,
    {
        self.append(parser::slot(f))
    }
}

impl<T, A, B, C, D, E> Builder5<T, A, B, C, D, E>
    where T: Tokens + 'static,
          A: 'static,
          B: 'static,
          C: 'static,
          D: 'static,
          E: 'static,
{
    /// As [`Builder0::skip`](struct.Builder0.html#method.skip).
    pub fn skip(self, piece: Parser<T, ()>) -> Builder5<T, A, B, C, D, E> {
        Builder5 { parser: self.parser.skipping_right(piece) }
    }

    /// Close the description over the five values kept.
    pub fn finish(self) -> Format<T, (A, B, C, D, E)> {
        Format::new(self.parser)
    }
}

impl<T, A, B, C, D, E> Builder5<T, A, B, C, D, E>
    where T: LinearTokens + 'static,
          A: 'static,
          B: 'static,
          C: 'static,
          D: 'static,
          E: 'static,
{
    /// As [`Builder0::literal`](struct.Builder0.html#method.literal).
    pub fn literal(self, text: &str) -> Builder5<T, A, B, C, D, E> {
        self.skip(parser::literal(text))
    }
}

impl<T> fmt::Debug for Builder0<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder0").finish_non_exhaustive()
    }
}

impl<T, A> fmt::Debug for Builder1<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder1").finish_non_exhaustive()
    }
}

impl<T, A, B> fmt::Debug for Builder2<T, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder2").finish_non_exhaustive()
    }
}

impl<T, A, B, C> fmt::Debug for Builder3<T, A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder3").finish_non_exhaustive()
    }
}

impl<T, A, B, C, D> fmt::Debug for Builder4<T, A, B, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder4").finish_non_exhaustive()
    }
}

impl<T, A, B, C, D, E> fmt::Debug for Builder5<T, A, B, C, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder5").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso::premade::{int, string};
    use crate::iso::variant;
    use crate::tokens::premade::Segments;

    fn seg(parts: &[&str]) -> Segments {
        Segments::from_parts(parts.iter().copied())
    }

    #[test]
    fn whole_input_only() {
        let f = build::<Segments>().literal("hello").slot(string()).finish();
        assert_eq!(f.parse(seg(&["hello", "world"])),
                   Ok(Some("world".to_string())));
        assert_eq!(f.parse(seg(&["hello", "world", "again"])), Ok(None));
        assert_eq!(f.parse(seg(&["hello"])), Ok(None));
    }

    #[test]
    fn literals_only() {
        let f = build::<Segments>().literal("status").finish();
        assert_eq!(f.parse(seg(&["status"])), Ok(Some(())));
        assert_eq!(f.render(&()), Ok(Some("status".to_string())));
    }

    #[test]
    fn builder_grows_flat_tuples() {
        let f = build::<Segments>()
            .slot(string())
            .literal("is")
            .slot(int())
            .literal("of")
            .slot(int())
            .finish();
        assert_eq!(f.parse(seg(&["step", "is", "2", "of", "3"])),
                   Ok(Some(("step".to_string(), 2, 3))));
        assert_eq!(f.render(&("step".to_string(), 2, 3)),
                   Ok(Some("stepis2of3".to_string())));
    }

    #[test]
    fn mapped_to_a_struct() {
        #[derive(Clone, PartialEq, Debug)]
        struct Visit {
            place: String,
            year: i64,
        }
        let f = build::<Segments>()
            .literal("saw")
            .slot(string())
            .literal("in")
            .slot(int())
            .finish()
            .map(variant(|(place, year)| Visit { place, year },
                         |v: &Visit| Some((v.place.clone(), v.year))));
        let visit = Visit { place: "osaka".to_string(), year: 2019 };
        assert_eq!(f.parse(seg(&["saw", "osaka", "in", "2019"])),
                   Ok(Some(visit.clone())));
        assert_eq!(f.render(&visit), Ok(Some("sawosakain2019".to_string())));
        assert_eq!(f.template_for(&visit),
                   Ok(Some(r"saw\(string)in\(int)".to_string())));
    }

    #[test]
    fn or_else_between_formats() {
        let long = build::<Segments>().literal("version").slot(int()).finish();
        let short = build::<Segments>().literal("v").slot(int()).finish();
        let f = long.or_else(short);
        assert_eq!(f.parse(seg(&["version", "3"])), Ok(Some(3)));
        assert_eq!(f.parse(seg(&["v", "3"])), Ok(Some(3)));
        assert_eq!(f.parse(seg(&["ver", "3"])), Ok(None));
        assert_eq!(f.render(&3), Ok(Some("version3".to_string())));
    }

    #[test]
    fn empty_format() {
        let f = Format::<Segments, i64>::empty();
        assert_eq!(f.parse(seg(&["3"])), Ok(None));
        assert_eq!(f.render(&3), Ok(None));
    }
}
