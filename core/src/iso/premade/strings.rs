//! Isomorphisms between string tokens and the primitive value types slots
//! are usually built from.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use crate::iso::PartialIso;
use super::identity;


/// String to string, the identity, labelled `"string"`.
pub fn string() -> PartialIso<String, String> {
    identity().with_label("string")
}

/// String to signed 64-bit integer, by decimal notation.
pub fn int() -> PartialIso<String, i64> {
    PartialIso::named("int",
                      |s: &String| Ok(s.parse().ok()),
                      |n: &i64| Ok(Some(n.to_string())))
}

/// String to boolean.  Accepts `"true"`/`"1"` and `"false"`/`"0"`; prints
/// `"true"`/`"false"`.
pub fn boolean() -> PartialIso<String, bool> {
    PartialIso::named("bool",
                      |s: &String| {
                          Ok(match s.as_str() {
                              "true" | "1" => Some(true),
                              "false" | "0" => Some(false),
                              _ => None,
                          })
                      },
                      |b: &bool| Ok(Some(String::from(if *b { "true" } else { "false" }))))
}

/// String to 64-bit float, by the standard notation both directions.
pub fn double() -> PartialIso<String, f64> {
    PartialIso::named("double",
                      |s: &String| Ok(s.parse().ok()),
                      |x: &f64| Ok(Some(x.to_string())))
}

/// String to any type whose canonical textual form round-trips through
/// [`FromStr`] and [`Display`].  This is the general hook for value types
/// with a stored raw representation, e.g. IP addresses or newtyped
/// identifiers.
///
/// [`FromStr`]: http://doc.rust-lang.org/std/str/trait.FromStr.html
/// [`Display`]: http://doc.rust-lang.org/std/fmt/trait.Display.html
pub fn parsed<A>(label: &str) -> PartialIso<String, A>
    where A: FromStr + Display + 'static,
{
    PartialIso::named(label,
                      |s: &String| Ok(s.parse().ok()),
                      |v: &A| Ok(Some(v.to_string())))
}

/// String to an enumerated value, by an explicit finite table of
/// `(raw, value)` pairs.  Anything outside the table, in either direction,
/// is a mismatch.
pub fn one_of<S, A, I>(label: &str, choices: I) -> PartialIso<String, A>
    where S: Into<String>,
          A: Clone + PartialEq + Send + Sync + 'static,
          I: IntoIterator<Item = (S, A)>,
{
    let table: Arc<Vec<(String, A)>> =
        Arc::new(choices.into_iter().map(|(s, a)| (s.into(), a)).collect());
    let rev = Arc::clone(&table);
    PartialIso::named(label,
                      move |s: &String| {
                          Ok(table.iter().find(|(k, _)| k == s).map(|(_, a)| a.clone()))
                      },
                      move |a: &A| {
                          Ok(rev.iter().find(|(_, v)| v == a).map(|(k, _)| k.clone()))
                      })
}
