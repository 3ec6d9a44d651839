//! Used by the integration tests of both the [core](../weft_core/index.html)
//! and the [full](../weft/index.html) crates.  It provides a test suite that
//! can be run over any token shape a format describes, with the shape's own
//! piece constructors supplied through
//! [`SuiteInput`](struct.SuiteInput.html), and premade suite inputs for the
//! bundled shapes.


// TODO: Suites for the shapes' own extras (flags, queries, translation
// tables), parameterized like `SuiteInput`.

use std::fmt::{self, Display};

use weft_core::*;


pub mod utils;


/// The piece constructors of one token shape, for running
/// [`test_suite0`](fn.test_suite0.html) over it.  Each shape under test
/// supplies its own way of making literal pieces, string slots, and whole
/// inputs.
pub struct SuiteInput<T> {
    /// Makes a piece matching exactly the given text.
    pub lit: Box<dyn Fn(&str) -> Parser<T, ()>>,
    /// Makes a piece taking one token as a string value.
    pub string_slot: Box<dyn Fn() -> Parser<T, String>>,
    /// Makes the shape's tokens from string parts, in order.
    pub tokens: Box<dyn Fn(&[&str]) -> T>,
}

impl<T> fmt::Debug for SuiteInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteInput").finish_non_exhaustive()
    }
}


fn rendering<T>(printed: Partial<T>) -> Partial<String>
    where T: Display,
{
    Ok(printed?.map(|tokens| tokens.to_string()))
}


/// Basic test suite that checks the shared piece algebra over any token
/// shape and does not exercise the shapes' own extras (flags, queries,
/// translation tables).
pub fn test_suite0<T>(input: &SuiteInput<T>)
    where T: Tokens + Clone + Display + 'static,
{
    let toks = |texts: &[&str]| (input.tokens)(texts);
    let lit = |text: &str| (input.lit)(text);
    let slot = || (input.string_slot)();

    macro_rules! test {
        ($pieces:expr, $texts:expr =>!)
            =>
        {assert_eq!(Format::new($pieces).parse(toks($texts)), Ok(None));};

        ($pieces:expr, $texts:expr => $value:expr)
            =>
        {let format = Format::new($pieces);
         assert_eq!(format.parse(toks($texts)), Ok(Some($value)));
         assert_eq!(rendering(format.parser().print(&$value)),
                    Ok(Some(toks($texts).to_string())));};
    }

    // Literal pieces match their own text and nothing else.
    test!(lit("go"), &["go"] => ());
    test!(lit("go"), &["went"] =>!);
    test!(lit("go"), &[] =>!);

    // Slots take one token through their isomorphism.
    test!(slot(), &["north"] => "north".to_string());
    test!(slot(), &[] =>!);

    // Sequencing threads the remainder left to right.
    test!(lit("go").skipping_left(slot()), &["go", "north"]
          => "north".to_string());
    test!(slot().sequence(slot()), &["go", "north"]
          => ("go".to_string(), "north".to_string()));
    test!(lit("go").skipping_left(slot()).skipping_right(lit("now")),
          &["go", "north", "now"] => "north".to_string());

    // Formats take whole inputs only.
    test!(lit("go"), &["go", "go"] =>!);

    // Alternation prefers its left side.
    let biased = Format::new(slot().map(utils::shouting()).or_else(slot()));
    assert_eq!(biased.parse(toks(&["hi"])), Ok(Some("HI".to_string())));

    // When a side dies after consuming, the other side gets the whole
    // input, not the leavings.
    let resumed = Format::new(
        lit("go").skipping_left(slot()).map(utils::vetoing())
            .or_else(lit("go").skipping_left(slot())));
    assert_eq!(resumed.parse(toks(&["go", "north"])),
               Ok(Some("north".to_string())));

    // Printing a sequence needs both sides to print.
    let strict = lit("go").skipping_left(slot().map(utils::vetoing()));
    assert_eq!(rendering(strict.print(&"north".to_string())), Ok(None));

    // Conversion failures pass through alternation instead of being
    // taken for mismatches.
    let poisoned = Format::new(
        slot().map(utils::failing("sour")).or_else(slot()));
    assert_eq!(poisoned.parse(toks(&["hi"])),
               Err(ConvertError::decode("sour")));

    // The empty parser matches nothing; the unit parser matches no tokens.
    assert_eq!(Format::new(Parser::<T, String>::empty()).parse(toks(&["hi"])),
               Ok(None));
    assert_eq!(Format::new(Parser::unit()).parse(toks(&[])), Ok(Some(())));
    assert_eq!(Format::new(Parser::unit()).parse(toks(&["hi"])), Ok(None));

    // TODO: A lot more
}
