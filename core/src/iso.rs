//! Partial isomorphisms: two-way, possibly-failing mappings between value
//! types.  Everything else in the engine is built on top of these.

#![allow(clippy::module_name_repetitions)]

use std::fmt;
use std::sync::Arc;

use crate::error::Partial;


/// Implementations provided for ready use.
pub mod premade {
    mod identity;
    pub use identity::identity;

    mod strings;
    pub use strings::{boolean, double, int, one_of, parsed, string};
}


/// The type of the behavior functions of a [`PartialIso`], one per
/// direction.  Both directions take their argument by reference; a
/// direction that must construct from its argument clones what it needs.
///
/// [`PartialIso`]: struct.PartialIso.html
pub type MapFn<A, B> = dyn Fn(&A) -> Partial<B> + Send + Sync;


/// A two-way partial mapping between the value types `A` and `B`.
///
/// Round-trip law: for any `a` where `apply(a)` is `Ok(Some(b))`,
/// `unapply(b)` reproduces a value equivalent to `a`, for the subset of `A`
/// the isomorphism claims to cover.  The law is not required to be total:
/// either direction may answer `Ok(None)` for values outside that subset,
/// and conversion-backed isomorphisms may answer `Err` when their underlying
/// transform itself fails (see [`Partial`]).
///
/// A `PartialIso` also carries a `label`: the semantic type name that
/// template mode substitutes for a slot built from it ("string", "int",
/// ...).
///
/// Instances are stateless and immutable, and they are `Send + Sync`, so
/// they may be shared and used concurrently without synchronization.
///
/// [`Partial`]: ../error/type.Partial.html
pub struct PartialIso<A, B> {
    apply: Arc<MapFn<A, B>>,
    unapply: Arc<MapFn<B, A>>,
    label: Arc<str>,
}

impl<A, B> PartialIso<A, B> {
    /// Make one from the two directions, with the placeholder label
    /// `"value"`.  Prefer [`named`](#method.named), or a premade
    /// constructor, whenever the isomorphism will back a slot, so that
    /// template mode has something meaningful to substitute.
    pub fn new(apply: impl Fn(&A) -> Partial<B> + Send + Sync + 'static,
               unapply: impl Fn(&B) -> Partial<A> + Send + Sync + 'static)
               -> Self {
        Self::named("value", apply, unapply)
    }

    /// Make one from a label and the two directions.
    pub fn named(label: &str,
                 apply: impl Fn(&A) -> Partial<B> + Send + Sync + 'static,
                 unapply: impl Fn(&B) -> Partial<A> + Send + Sync + 'static)
                 -> Self {
        PartialIso {
            apply: Arc::new(apply),
            unapply: Arc::new(unapply),
            label: Arc::from(label),
        }
    }

    /// The forward direction.
    pub fn apply(&self, a: &A) -> Partial<B> {
        (*self.apply)(a)
    }

    /// The backward direction.
    pub fn unapply(&self, b: &B) -> Partial<A> {
        (*self.unapply)(b)
    }

    /// The semantic type name substituted by template mode.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The same isomorphism under a different label.
    pub fn with_label(self, label: &str) -> Self {
        PartialIso { label: Arc::from(label), ..self }
    }

    /// Swap the two directions.  The label is kept, since it still names the
    /// more specific of the two sides.
    pub fn invert(self) -> PartialIso<B, A> {
        PartialIso { apply: self.unapply, unapply: self.apply, label: self.label }
    }

    /// Chain two isomorphisms end to end: applying goes through `self` then
    /// `next`, unapplying the reverse.  A mismatch on either leg is a
    /// mismatch of the whole; errors propagate.  The label of `next` wins,
    /// it names the final type.
    pub fn compose<C>(self, next: PartialIso<B, C>) -> PartialIso<A, C>
        where A: 'static,
              B: 'static,
              C: 'static,
    {
        let (fwd_first, fwd_second) = (self.clone(), next.clone());
        let (bwd_first, bwd_second) = (self, next);
        let label = Arc::clone(&bwd_second.label);
        PartialIso {
            apply: Arc::new(move |a| {
                let Some(b) = fwd_first.apply(a)? else { return Ok(None) };
                fwd_second.apply(&b)
            }),
            unapply: Arc::new(move |c| {
                let Some(b) = bwd_second.unapply(c)? else { return Ok(None) };
                bwd_first.unapply(&b)
            }),
            label,
        }
    }
}

impl<A, B> Clone for PartialIso<A, B> {
    fn clone(&self) -> Self {
        PartialIso {
            apply: Arc::clone(&self.apply),
            unapply: Arc::clone(&self.unapply),
            label: Arc::clone(&self.label),
        }
    }
}

impl<A, B> fmt::Debug for PartialIso<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialIso").field("label", &self.label).finish_non_exhaustive()
    }
}


/// Make a case isomorphism for a tagged union from a direct constructor and
/// a direct per-case extractor.
///
/// `apply` invokes the constructor; `unapply` invokes the extractor, which
/// answers `None` when the tag does not match.  This is deliberately the
/// whole contract: no equality requirement on the union, and no speculative
/// re-invocation of constructors.
pub fn variant<A, U>(construct: impl Fn(A) -> U + Send + Sync + 'static,
                     extract: impl Fn(&U) -> Option<A> + Send + Sync + 'static)
                     -> PartialIso<A, U>
    where A: Clone + 'static,
          U: 'static,
{
    PartialIso::new(move |a: &A| Ok(Some(construct(a.clone()))),
                    move |u: &U| Ok(extract(u)))
}

/// Like [`variant`](fn.variant.html), for a three-field case whose parser
/// side is the right-nested pair form that hand-combined sequencing
/// produces.
pub fn variant3<A, B, C, U>(construct: impl Fn((A, B, C)) -> U + Send + Sync + 'static,
                            extract: impl Fn(&U) -> Option<(A, B, C)> + Send + Sync + 'static)
                            -> PartialIso<(A, (B, C)), U>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          U: 'static,
{
    crate::tuple::flatten3().compose(variant(construct, extract))
}

/// Like [`variant3`](fn.variant3.html), for four fields.
pub fn variant4<A, B, C, D, U>(
    construct: impl Fn((A, B, C, D)) -> U + Send + Sync + 'static,
    extract: impl Fn(&U) -> Option<(A, B, C, D)> + Send + Sync + 'static)
    -> PartialIso<(A, (B, (C, D))), U>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
          U: 'static,
{
    crate::tuple::flatten4().compose(variant(construct, extract))
}

/// Like [`variant3`](fn.variant3.html), for five fields.
pub fn variant5<A, B, C, D, E, U>(
    construct: impl Fn((A, B, C, D, E)) -> U + Send + Sync + 'static,
    extract: impl Fn(&U) -> Option<(A, B, C, D, E)> + Send + Sync + 'static)
    -> PartialIso<(A, (B, (C, (D, E)))), U>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
          E: Clone + 'static,
          U: 'static,
{
    crate::tuple::flatten5().compose(variant(construct, extract))
}
