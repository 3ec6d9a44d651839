//! The parser/printer/template triple and the algebra for combining
//! triples.

#![allow(clippy::module_name_repetitions)]

use std::fmt;
use std::sync::Arc;

use crate::error::Partial;
use crate::iso::PartialIso;
use crate::tokens::{LinearTokens, Tokens};


/// The type of the parse behavior function of a [`Parser`]: consume a
/// prefix of the input, returning the remainder and the matched value.
///
/// [`Parser`]: struct.Parser.html
pub type ParseFn<T, A> = dyn Fn(T) -> Partial<(T, A)> + Send + Sync;

/// The type of the print and template behavior functions of a [`Parser`]:
/// turn a value back into a token sequence.
///
/// [`Parser`]: struct.Parser.html
pub type PrintFn<T, A> = dyn Fn(&A) -> Partial<T> + Send + Sync;


/// A bidirectional description of one piece of a format: how to parse a
/// value of `A` out of a token sequence `T`, how to print it back into one,
/// and how to render its documentation-template form.
///
/// The three directions of one `Parser` are expected to agree: whatever
/// `print` produces, `parse` accepts back to the same value.  The combining
/// methods preserve that agreement, so a whole format keeps the round-trip
/// property of its pieces.
///
/// Parsing is a single linear pass.  Once a combinator has consumed past a
/// token it never backs up; [`or_else`](#method.or_else) is the only point
/// where a fresh attempt is made, and only from the original input.
///
/// Values are immutable once constructed and `Send + Sync`; sharing across
/// threads needs no synchronization.
pub struct Parser<T, A> {
    parse: Arc<ParseFn<T, A>>,
    print: Arc<PrintFn<T, A>>,
    template: Arc<PrintFn<T, A>>,
}

impl<T, A> Parser<T, A>
    where T: 'static,
          A: 'static,
{
    /// Make one directly from the three behavior functions.  The combining
    /// methods below, and the `literal`/`slot`/`end` primitives, are the
    /// usual way; this is the escape hatch for shapes they do not cover.
    pub fn new(parse: impl Fn(T) -> Partial<(T, A)> + Send + Sync + 'static,
               print: impl Fn(&A) -> Partial<T> + Send + Sync + 'static,
               template: impl Fn(&A) -> Partial<T> + Send + Sync + 'static)
               -> Self {
        Parser {
            parse: Arc::new(parse),
            print: Arc::new(print),
            template: Arc::new(template),
        }
    }

    /// Consume a prefix of `input`, returning the remainder and the matched
    /// value, or `Ok(None)` when the input does not have this shape.
    pub fn parse(&self, input: T) -> Partial<(T, A)> {
        (*self.parse)(input)
    }

    /// Turn `value` back into tokens, or `Ok(None)` when the value has no
    /// representable token form.
    pub fn print(&self, value: &A) -> Partial<T> {
        (*self.print)(value)
    }

    /// Like [`print`](#method.print), but slots substitute their semantic
    /// type name instead of the concrete rendering.
    pub fn template(&self, value: &A) -> Partial<T> {
        (*self.template)(value)
    }

    /// Convert the result type through a [`PartialIso`].  Parsing applies
    /// the forward direction to the parsed value; printing and templating
    /// unapply first, then go through `self`.  A mismatch of the
    /// isomorphism, in either direction, is a mismatch of the whole.
    ///
    /// [`PartialIso`]: ../iso/struct.PartialIso.html
    pub fn map<B>(self, f: PartialIso<A, B>) -> Parser<T, B>
        where B: 'static,
    {
        let (p1, f1) = (self.clone(), f.clone());
        let (p2, f2) = (self.clone(), f.clone());
        let (p3, f3) = (self, f);
        Parser::new(
            move |input| {
                let Some((rest, a)) = p1.parse(input)? else { return Ok(None) };
                Ok(f1.apply(&a)?.map(|b| (rest, b)))
            },
            move |b: &B| {
                let Some(a) = f2.unapply(b)? else { return Ok(None) };
                p2.print(&a)
            },
            move |b: &B| {
                let Some(a) = f3.unapply(b)? else { return Ok(None) };
                p3.template(&a)
            },
        )
    }

    /// `self` then `next`, pairing their values.  Parsing threads the
    /// remainder of `self` into `next`.  Printing and templating render
    /// both sides and concatenate; **both sides must succeed, else the
    /// whole sequence fails**, because printing only one side would
    /// silently drop information and break the round-trip property.
    pub fn sequence<B>(self, next: Parser<T, B>) -> Parser<T, (A, B)>
        where T: Tokens,
              B: 'static,
    {
        let (l1, r1) = (self.clone(), next.clone());
        let (l2, r2) = (self.clone(), next.clone());
        let (l3, r3) = (self, next);
        Parser::new(
            move |input| {
                let Some((rest, a)) = l1.parse(input)? else { return Ok(None) };
                let Some((rest, b)) = r1.parse(rest)? else { return Ok(None) };
                Ok(Some((rest, (a, b))))
            },
            move |ab: &(A, B)| {
                Ok(match (l2.print(&ab.0)?, r2.print(&ab.1)?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
            move |ab: &(A, B)| {
                Ok(match (l3.template(&ab.0)?, r3.template(&ab.1)?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
        )
    }

    /// `self` then a throwaway unit piece: the piece's tokens are consumed
    /// when parsing and emitted when printing, but only `self`'s value
    /// remains.  Semantically this is [`sequence`](#method.sequence) plus
    /// the isomorphism dropping the unit half of the pair, with the same
    /// strict both-sides printing rule.
    pub fn skipping_right(self, next: Parser<T, ()>) -> Parser<T, A>
        where T: Tokens,
    {
        let (l1, r1) = (self.clone(), next.clone());
        let (l2, r2) = (self.clone(), next.clone());
        let (l3, r3) = (self, next);
        Parser::new(
            move |input| {
                let Some((rest, a)) = l1.parse(input)? else { return Ok(None) };
                let Some((rest, ())) = r1.parse(rest)? else { return Ok(None) };
                Ok(Some((rest, a)))
            },
            move |a: &A| {
                Ok(match (l2.print(a)?, r2.print(&())?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
            move |a: &A| {
                Ok(match (l3.template(a)?, r3.template(&())?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
        )
    }

    /// Left-biased choice.  Parsing tries `self` first; only on a
    /// structural mismatch is `other` tried, on the *original* input, so
    /// no partial consumption carries over.  Printing and templating
    /// likewise prefer `self`.  A conversion error from `self` propagates
    /// immediately rather than falling through: alternation recovers wrong
    /// shapes, not broken data.
    pub fn or_else(self, other: Parser<T, A>) -> Parser<T, A>
        where T: Clone,
    {
        let (l1, r1) = (self.clone(), other.clone());
        let (l2, r2) = (self.clone(), other.clone());
        let (l3, r3) = (self, other);
        Parser::new(
            move |input: T| {
                match l1.parse(input.clone())? {
                    Some(hit) => Ok(Some(hit)),
                    None => r1.parse(input),
                }
            },
            move |a: &A| {
                match l2.print(a)? {
                    Some(tokens) => Ok(Some(tokens)),
                    None => r2.print(a),
                }
            },
            move |a: &A| {
                match l3.template(a)? {
                    Some(tokens) => Ok(Some(tokens)),
                    None => r3.template(a),
                }
            },
        )
    }

    /// The parser that always mismatches, in all three directions.  The
    /// identity element of [`or_else`](#method.or_else).
    pub fn empty() -> Self {
        Parser::new(|_| Ok(None), |_| Ok(None), |_| Ok(None))
    }
}

impl<T> Parser<T, ()>
    where T: 'static,
{
    /// The parser that always succeeds with `()`, consuming nothing and
    /// printing the empty sequence.  The identity element for sequencing,
    /// and the seed the builders fold from.
    pub fn unit() -> Self
        where T: Tokens,
    {
        Parser::new(|input| Ok(Some((input, ()))),
                    |_: &()| Ok(Some(T::empty())),
                    |_: &()| Ok(Some(T::empty())))
    }

    /// A throwaway unit piece then `next`: the mirror of
    /// [`skipping_right`](struct.Parser.html#method.skipping_right), keeping
    /// only `next`'s value.
    pub fn skipping_left<B>(self, next: Parser<T, B>) -> Parser<T, B>
        where T: Tokens,
              B: 'static,
    {
        let (l1, r1) = (self.clone(), next.clone());
        let (l2, r2) = (self.clone(), next.clone());
        let (l3, r3) = (self, next);
        Parser::new(
            move |input| {
                let Some((rest, ())) = l1.parse(input)? else { return Ok(None) };
                r1.parse(rest)
            },
            move |b: &B| {
                Ok(match (l2.print(&())?, r2.print(b)?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
            move |b: &B| {
                Ok(match (l3.template(&())?, r3.template(b)?) {
                    (Some(left), Some(right)) => Some(left.concat(right)),
                    _ => None,
                })
            },
        )
    }
}

impl<T, A> Clone for Parser<T, A> {
    fn clone(&self) -> Self {
        Parser {
            parse: Arc::clone(&self.parse),
            print: Arc::clone(&self.print),
            template: Arc::clone(&self.template),
        }
    }
}

impl<T, A> fmt::Debug for Parser<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}


/// The parser that consumes exactly one token equal to the given text, with
/// no value; printing and templating emit that text.
pub fn literal<T>(text: &str) -> Parser<T, ()>
    where T: LinearTokens + 'static,
{
    let (t1, t2, t3) = (text.to_string(), text.to_string(), text.to_string());
    Parser::new(
        move |input: T| {
            let Some((head, rest)) = input.split_first() else { return Ok(None) };
            if head == t1 { Ok(Some((rest, ()))) } else { Ok(None) }
        },
        move |_: &()| Ok(Some(T::from_token(t2.clone()))),
        move |_: &()| Ok(Some(T::from_token(t3.clone()))),
    )
}

/// The parser that applies the given isomorphism to one token: a typed
/// placeholder.  Printing unapplies the value back into a token; templating
/// substitutes the isomorphism's label through the shape's
/// [`slot_placeholder`], still requiring the value to be representable.
///
/// On a shape like command-line arguments this doubles as a positional
/// argument.
///
/// [`slot_placeholder`]: ../tokens/trait.LinearTokens.html#tymethod.slot_placeholder
pub fn slot<T, A>(f: PartialIso<String, A>) -> Parser<T, A>
    where T: LinearTokens + 'static,
          A: 'static,
{
    let (f1, f2, f3) = (f.clone(), f.clone(), f);
    Parser::new(
        move |input: T| {
            let Some((head, rest)) = input.split_first() else { return Ok(None) };
            Ok(f1.apply(&head)?.map(|a| (rest, a)))
        },
        move |a: &A| Ok(f2.unapply(a)?.map(T::from_token)),
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            Ok(Some(T::from_token(T::slot_placeholder(f3.label()))))
        },
    )
}

/// The parser that succeeds only when no tokens remain.  Facades sequence
/// this after their own parser so a full-input parse must consume
/// everything.
pub fn end<T>() -> Parser<T, ()>
    where T: Tokens + 'static,
{
    Parser::new(
        |input: T| {
            if input.is_empty() { Ok(Some((T::empty(), ()))) } else { Ok(None) }
        },
        |_: &()| Ok(Some(T::empty())),
        |_: &()| Ok(Some(T::empty())),
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::iso::premade::{int, one_of, string};
    use crate::tokens::premade::Segments;

    fn seg(parts: &[&str]) -> Segments {
        Segments::from_parts(parts.iter().copied())
    }

    #[test]
    fn literal_exactness() {
        let p = literal::<Segments>("hello");
        assert_eq!(p.parse(seg(&["hello", "x"])), Ok(Some((seg(&["x"]), ()))));
        assert_eq!(p.parse(seg(&["goodbye"])), Ok(None));
        assert_eq!(p.parse(seg(&[])), Ok(None));
        assert_eq!(p.print(&()), Ok(Some(seg(&["hello"]))));
    }

    #[test]
    fn slot_directions() {
        let p = slot::<Segments, _>(int());
        assert_eq!(p.parse(seg(&["2019"])), Ok(Some((seg(&[]), 2019))));
        assert_eq!(p.parse(seg(&["twenty"])), Ok(None));
        assert_eq!(p.print(&2019), Ok(Some(seg(&["2019"]))));
        assert_eq!(p.template(&2019), Ok(Some(seg(&[r"\(int)"]))));
    }

    #[test]
    fn sequence_threads_left_to_right() {
        let p = slot::<Segments, _>(string()).sequence(slot(int()));
        assert_eq!(p.parse(seg(&["playground", "2019"])),
                   Ok(Some((seg(&[]), ("playground".into(), 2019)))));
        assert_eq!(p.print(&("playground".into(), 2019)),
                   Ok(Some(seg(&["playground", "2019"]))));
    }

    #[test]
    fn sequence_print_is_strict() {
        let color = one_of("color", [("red", 0_i64)]);
        let p = slot::<Segments, _>(int()).sequence(slot(color));
        // 9 has no raw form in the table, so the whole print mismatches.
        assert_eq!(p.print(&(1, 9)), Ok(None));
        assert_eq!(p.template(&(1, 9)), Ok(None));
        assert_eq!(p.print(&(1, 0)), Ok(Some(seg(&["1", "red"]))));
    }

    #[test]
    fn skipping_keeps_the_value_side() {
        let p = literal::<Segments>("year").skipping_left(slot(int()));
        assert_eq!(p.parse(seg(&["year", "2019"])), Ok(Some((seg(&[]), 2019))));
        assert_eq!(p.print(&2019), Ok(Some(seg(&["year", "2019"]))));

        let q = slot::<Segments, _>(int()).skipping_right(literal("."));
        assert_eq!(q.parse(seg(&["2019", "."])), Ok(Some((seg(&[]), 2019))));
        assert_eq!(q.print(&2019), Ok(Some(seg(&["2019", "."]))));
    }

    #[test]
    fn or_else_is_left_biased() {
        let upper = PartialIso::<String, String>::new(
            |s: &String| Ok(Some(s.to_uppercase())),
            |s: &String| Ok(Some(s.to_lowercase())),
        );
        let p = slot::<Segments, _>(string()).or_else(slot(upper));
        // Both branches match; the left one's value wins.
        assert_eq!(p.parse(seg(&["v"])), Ok(Some((seg(&[]), "v".into()))));
    }

    #[test]
    fn or_else_retries_from_the_original_input() {
        let digits = PartialIso::<i64, String>::new(
            |n: &i64| Ok(Some(n.to_string())),
            |s: &String| Ok(s.parse().ok()),
        );
        let p = literal::<Segments>("hello").skipping_left(slot(int()))
            .map(digits)
            .or_else(literal("hello").skipping_left(slot(string())));
        // The left branch consumes "hello" before mismatching on "world";
        // the right branch still sees the whole input.
        assert_eq!(p.parse(seg(&["hello", "world"])),
                   Ok(Some((seg(&[]), "world".into()))));
        assert_eq!(p.print(&"42".into()), Ok(Some(seg(&["hello", "42"]))));
        assert_eq!(p.print(&"world".into()),
                   Ok(Some(seg(&["hello", "world"]))));
    }

    #[test]
    fn or_else_propagates_conversion_errors() {
        let broken = PartialIso::<String, i64>::new(
            |_| Err(ConvertError::decode("boom")),
            |_| Err(ConvertError::encode("boom")),
        );
        let p = slot::<Segments, _>(broken).or_else(slot(int()));
        assert_eq!(p.parse(seg(&["2019"])), Err(ConvertError::decode("boom")));
        assert_eq!(p.print(&2019), Err(ConvertError::encode("boom")));
    }

    #[test]
    fn empty_never_matches() {
        let p = Parser::<Segments, i64>::empty();
        assert_eq!(p.parse(seg(&["2019"])), Ok(None));
        assert_eq!(p.print(&2019), Ok(None));
        assert_eq!(p.template(&2019), Ok(None));
    }

    #[test]
    fn unit_consumes_and_prints_nothing() {
        let p = Parser::<Segments, ()>::unit();
        assert_eq!(p.parse(seg(&["x"])), Ok(Some((seg(&["x"]), ()))));
        assert_eq!(p.print(&()), Ok(Some(seg(&[]))));
    }

    #[test]
    fn end_requires_exhaustion() {
        let p = end::<Segments>();
        assert_eq!(p.parse(seg(&[])), Ok(Some((seg(&[]), ()))));
        assert_eq!(p.parse(seg(&["x"])), Ok(None));
    }
}
