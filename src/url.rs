//! The URL facade: formats over decomposed URL components.
//!
//! This token shape is not one linear run: the scheme and host are
//! single-occupancy positions, path segments are an ordered run, and query
//! parameters are a keyed collection matched by name rather than by
//! position.  So instead of the generic literal/slot primitives, this
//! module provides a primitive per position.  Slot placeholders render as
//! `:label` in the templated form, e.g. `/invoice/:int`.

use std::fmt::{self, Display};
use std::str::FromStr;

use ::url::{ParseError, Url};
use weft_core::format::{self, Builder0};
use weft_core::iso::PartialIso;
use weft_core::parser::Parser;
use weft_core::tokens::Tokens;


/// A whole-input format over URL components.
pub type Format<A> = weft_core::Format<UrlParts, A>;


/// The decomposed-URL token shape: optional scheme and host, ordered path
/// segments, and query key/value pairs.
///
/// Concatenation fills each single-occupancy position from the first
/// operand that has it and appends the ordered collections.  Emptiness, as
/// checked by end-of-input anchoring, deliberately ignores query pairs:
/// a format accepts URLs carrying query parameters it does not mention,
/// since those are matched by key, not by position.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct UrlParts {
    scheme: Option<String>,
    host: Option<String>,
    path: Vec<String>,
    query: Vec<(String, String)>,
}

impl UrlParts {
    /// Make one holding only the given path segments.
    pub fn from_path<I>(segments: I) -> Self
        where I: IntoIterator,
              I::Item: Into<String>,
    {
        UrlParts {
            path: segments.into_iter().map(Into::into).collect(),
            ..UrlParts::default()
        }
    }

    /// The scheme position, if occupied.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The host position, if occupied.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The path segments, in order.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The query pairs, in order of appearance.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    fn take_first_path(&mut self) -> Option<String> {
        if self.path.is_empty() { None } else { Some(self.path.remove(0)) }
    }
}

impl Tokens for UrlParts {
    fn empty() -> Self {
        UrlParts::default()
    }

    // Unmatched query pairs do not block end anchoring.
    fn is_empty(&self) -> bool {
        self.scheme.is_none() && self.host.is_none() && self.path.is_empty()
    }

    fn concat(mut self, other: Self) -> Self {
        self.scheme = self.scheme.or(other.scheme);
        self.host = self.host.or(other.host);
        self.path.extend(other.path);
        self.query.extend(other.query);
        self
    }
}

impl Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}://", scheme)?;
        }
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        for segment in &self.path {
            write!(f, "/{}", segment)?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            f.write_str(if i == 0 { "?" } else { "&" })?;
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Decompose an already-parsed URL.  Empty path segments (e.g. from a
/// trailing slash) are dropped, and query pairs keep their order.
impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        UrlParts {
            scheme: Some(url.scheme().to_string()),
            host: url.host_str().map(str::to_string),
            path: url.path_segments()
                .map(|segments| {
                    segments.filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            query: url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }
}

/// Parse URL text and decompose it, with the `url` crate doing the actual
/// URL syntax.
impl FromStr for UrlParts {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s).map(|url| UrlParts::from(&url))
    }
}


/// Start describing a URL format.
pub fn build() -> Builder0<UrlParts> {
    format::build()
}

/// A piece requiring the scheme position to hold exactly `name`.
pub fn scheme(name: &str) -> Parser<UrlParts, ()> {
    let (n1, n2, n3) = (name.to_string(), name.to_string(), name.to_string());
    Parser::new(
        move |mut input: UrlParts| {
            Ok(match input.scheme.take() {
                Some(s) if s == n1 => Some((input, ())),
                _ => None,
            })
        },
        move |_: &()| {
            Ok(Some(UrlParts { scheme: Some(n2.clone()), ..UrlParts::default() }))
        },
        move |_: &()| {
            Ok(Some(UrlParts { scheme: Some(n3.clone()), ..UrlParts::default() }))
        },
    )
}

/// A piece requiring the host position to hold exactly `name`.
pub fn host(name: &str) -> Parser<UrlParts, ()> {
    let (n1, n2, n3) = (name.to_string(), name.to_string(), name.to_string());
    Parser::new(
        move |mut input: UrlParts| {
            Ok(match input.host.take() {
                Some(h) if h == n1 => Some((input, ())),
                _ => None,
            })
        },
        move |_: &()| {
            Ok(Some(UrlParts { host: Some(n2.clone()), ..UrlParts::default() }))
        },
        move |_: &()| {
            Ok(Some(UrlParts { host: Some(n3.clone()), ..UrlParts::default() }))
        },
    )
}

/// A typed placeholder taking the whole host position through the given
/// isomorphism.
pub fn host_slot<A>(f: PartialIso<String, A>) -> Parser<UrlParts, A>
    where A: 'static,
{
    let (f1, f2, f3) = (f.clone(), f.clone(), f);
    Parser::new(
        move |mut input: UrlParts| {
            let Some(h) = input.host.take() else { return Ok(None) };
            Ok(f1.apply(&h)?.map(|a| (input, a)))
        },
        move |a: &A| {
            Ok(f2.unapply(a)?.map(|h| {
                UrlParts { host: Some(h), ..UrlParts::default() }
            }))
        },
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            let placeholder = format!(":{}", f3.label());
            Ok(Some(UrlParts { host: Some(placeholder), ..UrlParts::default() }))
        },
    )
}

/// A piece matching exactly the given text as the next path segment.
pub fn path(text: &str) -> Parser<UrlParts, ()> {
    let (t1, t2, t3) = (text.to_string(), text.to_string(), text.to_string());
    Parser::new(
        move |mut input: UrlParts| {
            Ok(match input.take_first_path() {
                Some(s) if s == t1 => Some((input, ())),
                _ => None,
            })
        },
        move |_: &()| Ok(Some(UrlParts::from_path([t2.clone()]))),
        move |_: &()| Ok(Some(UrlParts::from_path([t3.clone()]))),
    )
}

/// A typed placeholder taking the next path segment through the given
/// isomorphism.
pub fn path_slot<A>(f: PartialIso<String, A>) -> Parser<UrlParts, A>
    where A: 'static,
{
    let (f1, f2, f3) = (f.clone(), f.clone(), f);
    Parser::new(
        move |mut input: UrlParts| {
            let Some(s) = input.take_first_path() else { return Ok(None) };
            Ok(f1.apply(&s)?.map(|a| (input, a)))
        },
        move |a: &A| Ok(f2.unapply(a)?.map(|s| UrlParts::from_path([s]))),
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            Ok(Some(UrlParts::from_path([format!(":{}", f3.label())])))
        },
    )
}

/// A typed placeholder taking the value of the query parameter named `key`
/// through the given isomorphism.  The pair may appear anywhere among the
/// input's query pairs; parsing consumes the first with that key, and a
/// format never requires the absence of pairs it does not mention.
pub fn query<A>(key: &str, f: PartialIso<String, A>) -> Parser<UrlParts, A>
    where A: 'static,
{
    let (k1, f1) = (key.to_string(), f.clone());
    let (k2, f2) = (key.to_string(), f.clone());
    let (k3, f3) = (key.to_string(), f);
    Parser::new(
        move |mut input: UrlParts| {
            let Some(pos) = input.query.iter().position(|(k, _)| *k == k1)
                else { return Ok(None) };
            let (_, value) = input.query.remove(pos);
            Ok(f1.apply(&value)?.map(|a| (input, a)))
        },
        move |a: &A| {
            Ok(f2.unapply(a)?.map(|value| {
                UrlParts { query: vec![(k2.clone(), value)], ..UrlParts::default() }
            }))
        },
        move |a: &A| {
            if f3.unapply(a)?.is_none() {
                return Ok(None);
            }
            let placeholder = format!(":{}", f3.label());
            Ok(Some(UrlParts {
                query: vec![(k3.clone(), placeholder)],
                ..UrlParts::default()
            }))
        },
    )
}
