//! The identity isomorphism.

use crate::iso::PartialIso;


/// The isomorphism that maps every value to itself, in both directions.
/// The identity element of [`compose`](../struct.PartialIso.html#method.compose).
pub fn identity<A>() -> PartialIso<A, A>
    where A: Clone + 'static,
{
    PartialIso::new(|a: &A| Ok(Some(a.clone())),
                    |a: &A| Ok(Some(a.clone())))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions() {
        assert_eq!(identity::<i64>().apply(&7), Ok(Some(7)));
        assert_eq!(identity::<i64>().unapply(&7), Ok(Some(7)));
    }

    #[test]
    fn compose_identity() {
        let f = identity::<String>().compose(crate::iso::premade::string());
        assert_eq!(f.apply(&"a".into()), Ok(Some("a".into())));
    }
}
