//! Isomorphisms between the tuple shapes that sequencing produces and the
//! flat tuples that are pleasant to consume.
//!
//! Chaining [`sequence`] pairs to the right, so three pieces come out as
//! `(A, (B, C))` and the builders, which grow to the left, produce
//! `((A, B), C)`.  The adapters here relate both nestings to the flat
//! `(A, B, C)` form, up to five elements.
//!
//! [`sequence`]: ../parser/struct.Parser.html#method.sequence

use crate::iso::PartialIso;


/// `(A, (B, C))` to `(A, B, C)`.
pub fn flatten3<A, B, C>() -> PartialIso<(A, (B, C)), (A, B, C)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
{
    PartialIso::new(
        |(a, (b, c)): &(A, (B, C))| Ok(Some((a.clone(), b.clone(), c.clone()))),
        |(a, b, c): &(A, B, C)| Ok(Some((a.clone(), (b.clone(), c.clone())))),
    )
}

/// `(A, (B, (C, D)))` to `(A, B, C, D)`.
pub fn flatten4<A, B, C, D>() -> PartialIso<(A, (B, (C, D))), (A, B, C, D)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
{
    PartialIso::new(
        |(a, (b, (c, d))): &(A, (B, (C, D)))| {
            Ok(Some((a.clone(), b.clone(), c.clone(), d.clone())))
        },
        |(a, b, c, d): &(A, B, C, D)| {
            Ok(Some((a.clone(), (b.clone(), (c.clone(), d.clone())))))
        },
    )
}

/// `(A, (B, (C, (D, E))))` to `(A, B, C, D, E)`.
pub fn flatten5<A, B, C, D, E>()
    -> PartialIso<(A, (B, (C, (D, E)))), (A, B, C, D, E)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
          E: Clone + 'static,
{
    PartialIso::new(
        |(a, (b, (c, (d, e)))): &(A, (B, (C, (D, E))))| {
            Ok(Some((a.clone(), b.clone(), c.clone(), d.clone(), e.clone())))
        },
        |(a, b, c, d, e): &(A, B, C, D, E)| {
            Ok(Some((a.clone(),
                     (b.clone(), (c.clone(), (d.clone(), e.clone()))))))
        },
    )
}


/// `(A, B, C)` to `(A, (B, C))`: the inverse of [`flatten3`].
///
/// [`flatten3`]: fn.flatten3.html
pub fn nest3<A, B, C>() -> PartialIso<(A, B, C), (A, (B, C))>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
{
    flatten3().invert()
}

/// `(A, B, C, D)` to `(A, (B, (C, D)))`: the inverse of [`flatten4`].
///
/// [`flatten4`]: fn.flatten4.html
pub fn nest4<A, B, C, D>() -> PartialIso<(A, B, C, D), (A, (B, (C, D)))>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
{
    flatten4().invert()
}

/// `(A, B, C, D, E)` to `(A, (B, (C, (D, E))))`: the inverse of
/// [`flatten5`].
///
/// [`flatten5`]: fn.flatten5.html
pub fn nest5<A, B, C, D, E>()
    -> PartialIso<(A, B, C, D, E), (A, (B, (C, (D, E))))>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
          E: Clone + 'static,
{
    flatten5().invert()
}


/// `((A, B), C)` to `(A, B, C)`: widen a flat pair by one more element, the
/// step the builders take at each `append`.
pub fn extend3<A, B, C>() -> PartialIso<((A, B), C), (A, B, C)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
{
    PartialIso::new(
        |((a, b), c): &((A, B), C)| Ok(Some((a.clone(), b.clone(), c.clone()))),
        |(a, b, c): &(A, B, C)| Ok(Some(((a.clone(), b.clone()), c.clone()))),
    )
}

/// `((A, B, C), D)` to `(A, B, C, D)`.
pub fn extend4<A, B, C, D>() -> PartialIso<((A, B, C), D), (A, B, C, D)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
{
    PartialIso::new(
        |((a, b, c), d): &((A, B, C), D)| {
            Ok(Some((a.clone(), b.clone(), c.clone(), d.clone())))
        },
        |(a, b, c, d): &(A, B, C, D)| {
            Ok(Some(((a.clone(), b.clone(), c.clone()), d.clone())))
        },
    )
}

/// `((A, B, C, D), E)` to `(A, B, C, D, E)`.
pub fn extend5<A, B, C, D, E>()
    -> PartialIso<((A, B, C, D), E), (A, B, C, D, E)>
    where A: Clone + 'static,
          B: Clone + 'static,
          C: Clone + 'static,
          D: Clone + 'static,
          E: Clone + 'static,
{
    PartialIso::new(
        |((a, b, c, d), e): &((A, B, C, D), E)| {
            Ok(Some((a.clone(), b.clone(), c.clone(), d.clone(), e.clone())))
        },
        |(a, b, c, d, e): &(A, B, C, D, E)| {
            Ok(Some(((a.clone(), b.clone(), c.clone(), d.clone()), e.clone())))
        },
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_and_nest_are_inverses() {
        let nested = (1, ("two".to_string(), 3.0));
        let flat = (1, "two".to_string(), 3.0);
        assert_eq!(flatten3().apply(&nested), Ok(Some(flat.clone())));
        assert_eq!(flatten3().unapply(&flat), Ok(Some(nested.clone())));
        assert_eq!(nest3().apply(&flat), Ok(Some(nested)));

        let nested = (1, (2, (3, (4, 5))));
        let flat = (1, 2, 3, 4, 5);
        assert_eq!(flatten5().apply(&nested), Ok(Some(flat)));
        assert_eq!(nest5().apply(&flat), Ok(Some(nested)));
    }

    #[test]
    fn extend_widens_by_one() {
        assert_eq!(extend3().apply(&((1, 2), 3)), Ok(Some((1, 2, 3))));
        assert_eq!(extend3().unapply(&(1, 2, 3)), Ok(Some(((1, 2), 3))));
        assert_eq!(extend4().apply(&((1, 2, 3), 4)), Ok(Some((1, 2, 3, 4))));
        assert_eq!(extend5().apply(&((1, 2, 3, 4), 5)),
                   Ok(Some((1, 2, 3, 4, 5))));
    }

    #[test]
    fn flatten4_round_trip() {
        let nested = ("a".to_string(), (1, (true, 2.5)));
        let flat = ("a".to_string(), 1, true, 2.5);
        assert_eq!(flatten4().apply(&nested), Ok(Some(flat.clone())));
        assert_eq!(flatten4().unapply(&flat), Ok(Some(nested)));
    }
}
