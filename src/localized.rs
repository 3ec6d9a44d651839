//! The localization facade: formats whose printed form doubles as a
//! translation-lookup key with positional arguments.
//!
//! Printing a value produces a [`LocalizedTemplate`], which renders three
//! ways at once: the concrete text as written in the format, the key form
//! with `{}`/`{index}` placeholders where the slots are, and the slot
//! values themselves as typed arguments.  [`Localize::localize`] ties them
//! together: look the key form up in a [`Bundle`] of translations,
//! substitute the arguments into the translated text, and fall back to the
//! concrete rendering when no translation exists.
//!
//! [`LocalizedTemplate`]: struct.LocalizedTemplate.html
//! [`Localize::localize`]: trait.Localize.html#tymethod.localize
//! [`Bundle`]: trait.Bundle.html

use std::collections::HashMap;
use std::fmt::{self, Display};

use weft_core::error::Partial;
use weft_core::format::{self, Builder0};
use weft_core::iso::PartialIso;
use weft_core::parser::Parser;
use weft_core::tokens::Tokens;


/// A whole-input format over localized templates.
pub type Format<A> = weft_core::Format<LocalizedTemplate, A>;


/// One argument value captured by a localized slot, in the small set of
/// shapes translation substitution understands.
#[derive(Clone, PartialEq, Debug)]
pub enum LocArg {
    /// A textual argument.
    Str(String),
    /// A signed integer argument.
    Int(i64),
    /// A floating-point argument.
    Float(f64),
    /// A boolean argument.
    Bool(bool),
}

/// Renders the raw value, exactly as substitution inserts it.
impl Display for LocArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocArg::Str(s) => f.write_str(s),
            LocArg::Int(n) => write!(f, "{}", n),
            LocArg::Float(x) => write!(f, "{}", x),
            LocArg::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Value types that can pass through localized slots.  The captured
/// argument is what translation substitution inserts for the slot's
/// placeholder.
pub trait Localizable {
    /// The value as a substitution argument.
    fn as_arg(&self) -> LocArg;
}

impl Localizable for String {
    fn as_arg(&self) -> LocArg {
        LocArg::Str(self.clone())
    }
}

impl Localizable for i64 {
    fn as_arg(&self) -> LocArg {
        LocArg::Int(*self)
    }
}

impl Localizable for f64 {
    fn as_arg(&self) -> LocArg {
        LocArg::Float(*self)
    }
}

impl Localizable for bool {
    fn as_arg(&self) -> LocArg {
        LocArg::Bool(*self)
    }
}


/// One segment of a template: its concrete rendering, its contribution to
/// the key form, and its captured argument when it came from a slot.
#[derive(Clone, PartialEq, Debug)]
struct LocSeg {
    rendered: String,
    placeholder: String,
    arg: Option<LocArg>,
}

/// The localized-template token shape: an ordered list of segments, each
/// carrying its concrete rendering, its key-form placeholder, and, for
/// slot segments, the captured argument.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LocalizedTemplate {
    segments: Vec<LocSeg>,
}

impl LocalizedTemplate {
    /// Make one of literal segments from anything yielding string-ish
    /// parts, in order.  This is the usual way to hand input to a
    /// localized format's parser.
    pub fn from_texts<I>(texts: I) -> Self
        where I: IntoIterator,
              I::Item: Into<String>,
    {
        LocalizedTemplate {
            segments: texts.into_iter()
                .map(|t| {
                    let text = t.into();
                    LocSeg { rendered: text.clone(), placeholder: text, arg: None }
                })
                .collect(),
        }
    }

    /// The key form: literal text as written, `{}` or `{index}` where the
    /// slots are.  This is what a [`Bundle`](trait.Bundle.html) is keyed
    /// by.
    pub fn key(&self) -> String {
        self.segments.iter().map(|s| s.placeholder.as_str()).collect()
    }

    /// The slot arguments, in template order.
    pub fn args(&self) -> Vec<LocArg> {
        self.segments.iter().filter_map(|s| s.arg.clone()).collect()
    }

    fn one(segment: LocSeg) -> Self {
        LocalizedTemplate { segments: vec![segment] }
    }

    fn take_first(mut self) -> Option<(LocSeg, Self)> {
        if self.segments.is_empty() {
            None
        } else {
            let seg = self.segments.remove(0);
            Some((seg, self))
        }
    }
}

impl Tokens for LocalizedTemplate {
    fn empty() -> Self {
        LocalizedTemplate::default()
    }

    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn concat(mut self, other: Self) -> Self {
        self.segments.extend(other.segments);
        self
    }
}

/// The concrete rendering: segments joined as written, placeholders not
/// substituted.
impl Display for LocalizedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.rendered)?;
        }
        Ok(())
    }
}


/// Start describing a localized format.
pub fn build() -> Builder0<LocalizedTemplate> {
    format::build()
}

/// A piece matching exactly the given text as one segment.  Its text
/// appears verbatim in both the concrete rendering and the key form.
pub fn lit(text: &str) -> Parser<LocalizedTemplate, ()> {
    let (t1, t2, t3) = (text.to_string(), text.to_string(), text.to_string());
    Parser::new(
        move |input: LocalizedTemplate| {
            Ok(match input.take_first() {
                Some((seg, rest)) if seg.rendered == t1 => Some((rest, ())),
                _ => None,
            })
        },
        move |_: &()| Ok(Some(LocalizedTemplate::from_texts([t2.clone()]))),
        move |_: &()| Ok(Some(LocalizedTemplate::from_texts([t3.clone()]))),
    )
}

/// A typed placeholder taking one segment through the given isomorphism.
/// Its key-form contribution is `{}`, taking translation arguments in
/// order; the templated form substitutes `{label}`.
pub fn slot<A>(f: PartialIso<String, A>) -> Parser<LocalizedTemplate, A>
    where A: Localizable + 'static,
{
    slot_with(f, "{}".to_string())
}

/// As [`slot`](fn.slot.html), with the explicit key-form contribution
/// `{index}`, for translations that reorder their arguments.
pub fn slot_at<A>(index: usize, f: PartialIso<String, A>)
    -> Parser<LocalizedTemplate, A>
    where A: Localizable + 'static,
{
    slot_with(f, format!("{{{}}}", index))
}

fn slot_with<A>(f: PartialIso<String, A>, placeholder: String)
    -> Parser<LocalizedTemplate, A>
    where A: Localizable + 'static,
{
    let (f1, f2, f3) = (f.clone(), f.clone(), f);
    Parser::new(
        move |input: LocalizedTemplate| {
            let Some((seg, rest)) = input.take_first() else { return Ok(None) };
            Ok(f1.apply(&seg.rendered)?.map(|a| (rest, a)))
        },
        move |a: &A| {
            Ok(f2.unapply(a)?.map(|rendered| {
                LocalizedTemplate::one(LocSeg {
                    rendered,
                    placeholder: placeholder.clone(),
                    arg: Some(a.as_arg()),
                })
            }))
        },
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            let label = format!("{{{}}}", f3.label());
            Ok(Some(LocalizedTemplate::one(LocSeg {
                rendered: label.clone(),
                placeholder: label,
                arg: None,
            })))
        },
    )
}


/// Sources of translated template text, keyed by the key form of a
/// template.
pub trait Bundle {
    /// The translation for `key` in the named table, or in the default
    /// table when no name is given.  `None` makes
    /// [`localize`](trait.Localize.html#tymethod.localize) fall back to
    /// the concrete rendering.
    fn localized(&self, key: &str, table: Option<&str>) -> Option<String>;
}

/// A [`Bundle`](trait.Bundle.html) backed by in-memory maps, for tests and
/// simple embedded setups.  A missing named table yields no translations;
/// there is no cross-table fallback.
#[derive(Clone, Debug, Default)]
pub struct MapBundle {
    default: HashMap<String, String>,
    tables: HashMap<String, HashMap<String, String>>,
}

impl MapBundle {
    /// Make one whose default table holds the given entries.
    pub fn new<K, V, I>(entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>,
    {
        MapBundle {
            default: entries.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            tables: HashMap::new(),
        }
    }

    /// Add a named table holding the given entries.
    pub fn with_table<K, V, I>(mut self, name: &str, entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>,
    {
        let table = entries.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let _ = self.tables.insert(name.to_string(), table);
        self
    }
}

impl Bundle for MapBundle {
    fn localized(&self, key: &str, table: Option<&str>) -> Option<String> {
        let map = match table {
            Some(name) => self.tables.get(name)?,
            None => &self.default,
        };
        map.get(key).cloned()
    }
}


/// Rendering through translation bundles, for whole localized formats.
pub trait Localize<A> {
    /// Print `value`, look its key form up in `bundle`, and substitute the
    /// value's arguments into the translated text.  Without a translation
    /// the concrete rendering is returned as written.
    fn localize(&self, value: &A, bundle: &dyn Bundle, table: Option<&str>)
                -> Partial<String>;
}

impl<A> Localize<A> for Format<A>
    where A: 'static,
{
    fn localize(&self, value: &A, bundle: &dyn Bundle, table: Option<&str>)
                -> Partial<String> {
        let Some(tokens) = self.parser().print(value)? else { return Ok(None) };
        Ok(Some(match bundle.localized(&tokens.key(), table) {
            Some(translated) => substitute(&translated, &tokens.args()),
            None => tokens.to_string(),
        }))
    }
}

/// Replace `{}` and `{index}` placeholders in translated text with the
/// given arguments; `{}` takes them in order.  `{{` is a literal `{`, a
/// lone `}` needs no escape, and a placeholder with no matching argument
/// is left as written.
fn substitute(text: &str, args: &[LocArg]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut next = 0;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[.. open]);
        let tail = &rest[open + 1 ..];
        if let Some(t) = tail.strip_prefix('{') {
            out.push('{');
            rest = t;
        } else if let Some(t) = tail.strip_prefix('}') {
            match args.get(next) {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str("{}"),
            }
            next += 1;
            rest = t;
        } else {
            let digits = tail.bytes().take_while(|b| b.is_ascii_digit()).count();
            if digits > 0 && tail.as_bytes().get(digits) == Some(&b'}') {
                match tail[.. digits].parse::<usize>().ok()
                    .and_then(|i| args.get(i))
                {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(&tail[..= digits]);
                    },
                }
                rest = &tail[digits + 1 ..];
            } else {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
