//! Traits that are our abstraction of "token sequences".

#![allow(clippy::module_name_repetitions)]

/// Implementations provided for ready use.
pub mod premade {
    mod segments;
    pub use segments::Segments;
}


/// An ordered sequence of tokens that has an identity element and an
/// associative concatenation, i.e. a monoid.  This is the whole requirement
/// the combining algebra places on an input/output shape, which is what lets
/// one engine drive plain text templates, URL components, command-line
/// arguments, and localized templates alike.
///
/// Rendering a sequence to its final user-facing text is deliberately not
/// part of this trait; shapes that support it implement [`Display`], and the
/// facade operations that need rendering bound on that.
///
/// [`Display`]: http://doc.rust-lang.org/std/fmt/trait.Display.html
pub trait Tokens
    where Self: Sized,
{
    /// Make an empty one, the identity element of [`concat`].
    ///
    /// [`concat`]: #tymethod.concat
    fn empty() -> Self;

    /// Predicate for if an instance is an empty one.  This is what
    /// end-of-input anchoring checks.
    fn is_empty(&self) -> bool;

    /// Concatenate two sequences (of the same type) to form a single
    /// sequence.  Must be associative, with [`empty`] as identity.
    ///
    /// [`empty`]: #tymethod.empty
    fn concat(self, other: Self) -> Self;
}


/// A [`Tokens`] shape whose tokens form one flat run of strings, which is
/// what the generic head-consuming `literal` and `slot` primitives need.
/// Shapes with more structure than a single run (e.g. URL components, which
/// separate scheme, host, path, and query) do not implement this and define
/// their own primitives instead.
///
/// [`Tokens`]: trait.Tokens.html
pub trait LinearTokens: Tokens {
    /// Split off the first token, returning it and the remainder, or `None`
    /// if no tokens remain.
    fn split_first(self) -> Option<(String, Self)>;

    /// Make a sequence holding the single given token.
    fn from_token(token: String) -> Self;

    /// How this shape presents a documentation placeholder for a slot whose
    /// isomorphism carries the given label, e.g. `\(int)` for plain
    /// segments.  Used by template mode only.
    fn slot_placeholder(label: &str) -> String;
}
