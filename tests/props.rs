//! Property-based tests of the laws the piece algebra promises: whatever a
//! format prints, it parses back to the same value.

use proptest::prelude::*;
use uuid::Uuid;

use weft::cli::{self, CliArgs};
use weft::iso::{int, string, uuid};
use weft::localized::{self, Localize, MapBundle};
use weft::parser;
use weft::text;
use weft::tokens::premade::Segments;
use weft::tokens::Tokens;


fn count_format() -> text::Format<i64> {
    text::build()
        .skip(text::lit("count "))
        .append(text::slot(int()))
        .finish()
}

fn pair_format() -> text::Format<(String, i64)> {
    text::build()
        .append(text::slot(string()))
        .skip(text::lit(" x "))
        .append(text::slot(int()))
        .finish()
}


proptest! {
    /// Printing then parsing is the identity on values.
    #[test]
    fn prop_print_parse_identity_int(n: i64) {
        let f = count_format();
        let printed = f.parser().print(&n).unwrap().unwrap();
        prop_assert_eq!(f.parse(printed), Ok(Some(n)));
    }

    /// The same, with a string slot that takes whatever the token holds.
    #[test]
    fn prop_print_parse_identity_pair(s: String, n: i64) {
        let f = pair_format();
        let printed = f.parser().print(&(s.clone(), n)).unwrap().unwrap();
        prop_assert_eq!(f.parse(printed), Ok(Some((s, n))));
    }

    /// Token concatenation is associative with emptiness as identity.
    #[test]
    fn prop_segments_monoid(a: Vec<String>, b: Vec<String>, c: Vec<String>) {
        let (a, b, c) = (Segments::from_parts(a),
                         Segments::from_parts(b),
                         Segments::from_parts(c));
        prop_assert_eq!(a.clone().concat(b.clone()).concat(c.clone()),
                        a.clone().concat(b.concat(c)));
        prop_assert_eq!(Segments::empty().concat(a.clone()), a.clone());
        prop_assert_eq!(a.clone().concat(Segments::empty()), a);
    }

    /// Positional slots hand words through untouched, whatever they hold.
    #[test]
    fn prop_cli_positionals_round_trip(a: String, b: String) {
        let f = cli::build()
            .skip(cli::command("copy"))
            .append(parser::slot(string()))
            .append(parser::slot(string()))
            .finish();
        let input =
            CliArgs::from_args(["copy".to_string(), a.clone(), b.clone()]);
        prop_assert_eq!(f.parse(input), Ok(Some((a, b))));
    }

    /// The UUID isomorphism round trips every value through its hyphenated
    /// form.
    #[test]
    fn prop_uuid_text_round_trip(n: u128) {
        let f = uuid();
        let text = f.unapply(&Uuid::from_u128(n)).unwrap().unwrap();
        prop_assert_eq!(f.apply(&text), Ok(Some(Uuid::from_u128(n))));
    }

    /// Substituting a translation never goes wrong, whatever text the
    /// bundle holds for the key.
    #[test]
    fn prop_translation_substitution_total(translated: String,
                                           a: i64, b: i64) {
        let f = localized::build()
            .skip(localized::lit("Step "))
            .append(localized::slot_at(0, int()))
            .skip(localized::lit(" of "))
            .append(localized::slot_at(1, int()))
            .finish();
        let bundle =
            MapBundle::new([("Step {0} of {1}".to_string(), translated)]);
        let out = f.localize(&(a, b), &bundle, None);
        prop_assert!(matches!(out, Ok(Some(_))));
    }
}
