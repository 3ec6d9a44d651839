//! The command-line facade: formats over an argument list.
//!
//! The token shape is linear, so the generic slot primitive doubles as a
//! positional argument, consumed in order.  The flag primitives instead
//! search the remaining arguments wherever they are, which is what keeps
//! option order free while end anchoring still rejects arguments the
//! format does not mention.  Describe flag pieces ahead of positional
//! slots, so flags and their values are plucked out before the slots take
//! what remains.  Slot placeholders render as `<label>` in the templated
//! form, e.g. `serve --port <int>`.

use std::fmt::{self, Display};

use weft_core::format::{self, Builder0};
use weft_core::iso::PartialIso;
use weft_core::parser::{self, Parser};
use weft_core::tokens::{LinearTokens, Tokens};


/// A whole-input format over command-line arguments.
pub type Format<A> = weft_core::Format<CliArgs, A>;


/// The argument-list token shape: an ordered list of argument words, as
/// received from the OS after shell word-splitting.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CliArgs {
    args: Vec<String>,
}

impl CliArgs {
    /// Make one from anything yielding argument words, in order.  Pass
    /// `std::env::args().skip(1)` for the real command line.
    pub fn from_args<I>(args: I) -> Self
        where I: IntoIterator,
              I::Item: Into<String>,
    {
        CliArgs { args: args.into_iter().map(Into::into).collect() }
    }

    /// Borrow the underlying argument words.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Tokens for CliArgs {
    fn empty() -> Self {
        CliArgs { args: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    fn concat(mut self, other: Self) -> Self {
        self.args.extend(other.args);
        self
    }
}

impl LinearTokens for CliArgs {
    fn split_first(mut self) -> Option<(String, Self)> {
        if self.args.is_empty() {
            None
        } else {
            let head = self.args.remove(0);
            Some((head, self))
        }
    }

    fn from_token(token: String) -> Self {
        CliArgs { args: vec![token] }
    }

    fn slot_placeholder(label: &str) -> String {
        format!("<{}>", label)
    }
}

/// Arguments joined by single spaces.  Quoting words for a shell is up to
/// the caller; this rendering is for display.
impl Display for CliArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}


/// A flag under both its spellings, prerendered.
#[derive(Clone)]
struct FlagSpec {
    long: String,
    short: Option<String>,
}

impl FlagSpec {
    fn new(long: &str, short: Option<char>) -> Self {
        FlagSpec {
            long: format!("--{}", long),
            short: short.map(|c| format!("-{}", c)),
        }
    }

    fn find(&self, args: &[String]) -> Option<usize> {
        args.iter().position(|arg| {
            *arg == self.long || self.short.as_deref() == Some(arg.as_str())
        })
    }
}


/// Start describing a command-line format.
pub fn build() -> Builder0<CliArgs> {
    format::build()
}

/// A piece matching exactly the given word, typically the leading command
/// or subcommand name.
pub fn command(name: &str) -> Parser<CliArgs, ()> {
    parser::literal(name)
}

/// A required valued flag: `--long value`, also accepted as `-s value` when
/// a short spelling is given.  The flag may appear anywhere among the
/// remaining arguments; the value is the word following it.  Printing
/// always uses the long spelling.
pub fn arg<A>(long: &str, short: Option<char>, f: PartialIso<String, A>)
    -> Parser<CliArgs, A>
    where A: 'static,
{
    let (s1, f1) = (FlagSpec::new(long, short), f.clone());
    let (s2, f2) = (s1.clone(), f.clone());
    let (s3, f3) = (s1.clone(), f);
    Parser::new(
        move |mut input: CliArgs| {
            let Some(pos) = s1.find(&input.args) else { return Ok(None) };
            if pos + 1 >= input.args.len() {
                return Ok(None);
            }
            let _ = input.args.remove(pos);
            let value = input.args.remove(pos);
            Ok(f1.apply(&value)?.map(|a| (input, a)))
        },
        move |a: &A| {
            Ok(f2.unapply(a)?
                .map(|value| CliArgs::from_args([s2.long.clone(), value])))
        },
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            let placeholder = CliArgs::slot_placeholder(f3.label());
            Ok(Some(CliArgs::from_args([s3.long.clone(), placeholder])))
        },
    )
}

/// An optional valued flag.  An absent flag parses as `None`; a present
/// flag must carry a convertible value, so `--long` followed by an
/// unconvertible word is a mismatch rather than silently `None`.
pub fn arg_opt<A>(long: &str, short: Option<char>, f: PartialIso<String, A>)
    -> Parser<CliArgs, Option<A>>
    where A: 'static,
{
    let (s1, f1) = (FlagSpec::new(long, short), f.clone());
    let (s2, f2) = (s1.clone(), f.clone());
    let (s3, f3) = (s1.clone(), f);
    Parser::new(
        move |mut input: CliArgs| {
            let Some(pos) = s1.find(&input.args) else {
                return Ok(Some((input, None)));
            };
            if pos + 1 >= input.args.len() {
                return Ok(None);
            }
            let _ = input.args.remove(pos);
            let value = input.args.remove(pos);
            Ok(f1.apply(&value)?.map(|a| (input, Some(a))))
        },
        move |a: &Option<A>| {
            match a {
                None => Ok(Some(CliArgs::empty())),
                Some(a) => {
                    Ok(f2.unapply(a)?
                        .map(|value| CliArgs::from_args([s2.long.clone(), value])))
                },
            }
        },
        move |a: &Option<A>| {
            match a {
                None => Ok(Some(CliArgs::empty())),
                Some(a) => {
                    if f3.unapply(a)?.is_none() {
                        return Ok(None);
                    }
                    let placeholder = CliArgs::slot_placeholder(f3.label());
                    Ok(Some(CliArgs::from_args([s3.long.clone(), placeholder])))
                },
            }
        },
    )
}

/// A presence flag: `true` when the flag appears, `false` when it does not,
/// so parsing always succeeds.  Printing emits the long spelling for `true`
/// and nothing for `false`.
pub fn option(long: &str, short: Option<char>) -> Parser<CliArgs, bool> {
    let s1 = FlagSpec::new(long, short);
    let (s2, s3) = (s1.clone(), s1.clone());
    Parser::new(
        move |mut input: CliArgs| {
            Ok(Some(match s1.find(&input.args) {
                Some(pos) => {
                    let _ = input.args.remove(pos);
                    (input, true)
                },
                None => (input, false),
            }))
        },
        move |b: &bool| {
            Ok(Some(if *b {
                CliArgs::from_args([s2.long.clone()])
            } else {
                CliArgs::empty()
            }))
        },
        move |b: &bool| {
            Ok(Some(if *b {
                CliArgs::from_args([s3.long.clone()])
            } else {
                CliArgs::empty()
            }))
        },
    )
}
