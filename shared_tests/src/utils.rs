//! Utilities for constructing suite inputs and isomorphisms of various
//! behaviors.

use weft_core::iso::premade::string;
use weft_core::parser;
use weft_core::tokens::premade::Segments;
use weft_core::{ConvertError, PartialIso};

use weft::cli::CliArgs;
use weft::localized::{self, LocalizedTemplate};
use weft::url::{self, UrlParts};

use super::*;


/// An isomorphism whose directions are visibly different: uppercasing
/// forward, lowercasing back.  Alternation-bias tests rely on seeing which
/// side ran.
pub fn shouting() -> PartialIso<String, String> {
    PartialIso::named(
        "shout",
        |s: &String| Ok(Some(s.to_uppercase())),
        |s: &String| Ok(Some(s.to_lowercase())),
    )
}

/// An isomorphism that matches nothing in either direction, for forcing
/// the mismatch paths.
pub fn vetoing() -> PartialIso<String, String> {
    PartialIso::named(
        "veto",
        |_: &String| Ok(None),
        |_: &String| Ok(None),
    )
}

/// An isomorphism that fails outright in both directions with the given
/// message, for checking that real failures are kept apart from
/// mismatches.
pub fn failing(message: &'static str) -> PartialIso<String, String> {
    PartialIso::named(
        "failure",
        move |_: &String| Err(ConvertError::decode(message)),
        move |_: &String| Err(ConvertError::encode(message)),
    )
}


/// Suite input over plain text segments.
pub fn segments_input() -> SuiteInput<Segments> {
    SuiteInput {
        lit: Box::new(|text| parser::literal(text)),
        string_slot: Box::new(|| parser::slot(string())),
        tokens: Box::new(|texts| Segments::from_parts(texts.iter().copied())),
    }
}

/// Suite input over command-line argument words.
pub fn cli_input() -> SuiteInput<CliArgs> {
    SuiteInput {
        lit: Box::new(|text| parser::literal(text)),
        string_slot: Box::new(|| parser::slot(string())),
        tokens: Box::new(|texts| CliArgs::from_args(texts.iter().copied())),
    }
}

/// Suite input over the path part of URL requests.
pub fn url_path_input() -> SuiteInput<UrlParts> {
    SuiteInput {
        lit: Box::new(|text| url::path(text)),
        string_slot: Box::new(|| url::path_slot(string())),
        tokens: Box::new(|texts| UrlParts::from_path(texts.iter().copied())),
    }
}

/// Suite input over localized template segments.
pub fn localized_input() -> SuiteInput<LocalizedTemplate> {
    SuiteInput {
        lit: Box::new(|text| localized::lit(text)),
        string_slot: Box::new(|| localized::slot(string())),
        tokens: Box::new(|texts| {
            LocalizedTemplate::from_texts(texts.iter().copied())
        }),
    }
}


// This only tests the internal units of this module.  We need to make sure
// that these constructors make working pieces, before depending on them for
// other tests.
#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::Format;

    macro_rules! test_input {
        ($input:expr)
            =>
        {let input = $input;
         let go = Format::new((input.lit)("go"));
         assert_eq!(go.parse((input.tokens)(&["go"])), Ok(Some(())));
         assert_eq!(go.parse((input.tokens)(&["went"])), Ok(None));
         let slot = Format::new((input.string_slot)());
         assert_eq!(slot.parse((input.tokens)(&["north"])),
                    Ok(Some("north".to_string())));};
    }

    #[test]
    fn premade_inputs_make_working_pieces() {
        test_input!(segments_input());
        test_input!(cli_input());
        test_input!(url_path_input());
        test_input!(localized_input());
    }
}
