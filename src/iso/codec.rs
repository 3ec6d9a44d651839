//! Conversion isomorphisms backed by serialization crates.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use weft_core::error::ConvertError;
use weft_core::PartialIso;


/// String to [`Uuid`].  Parsing accepts the forms `Uuid` itself accepts;
/// printing emits the canonical hyphenated form.  Malformed text is a
/// mismatch, like any other slot value of the wrong shape.
///
/// [`Uuid`]: https://docs.rs/uuid/1/uuid/struct.Uuid.html
pub fn uuid() -> PartialIso<String, Uuid> {
    PartialIso::named("uuid",
                      |s: &String| Ok(Uuid::parse_str(s).ok()),
                      |u: &Uuid| Ok(Some(u.to_string())))
}

/// JSON text to any serde-round-trippable value.
///
/// Unlike the primitive notations, a failure here is a conversion error,
/// not a mismatch: a slot that expects JSON and receives text that does not
/// deserialize indicates corrupt data, and likewise for a value that does
/// not serialize, so alternation does not absorb either.
pub fn json<V>() -> PartialIso<String, V>
    where V: Serialize + DeserializeOwned + 'static,
{
    PartialIso::named("json",
                      |s: &String| {
                          serde_json::from_str(s).map(Some)
                              .map_err(ConvertError::decode)
                      },
                      |v: &V| {
                          serde_json::to_string(v).map(Some)
                              .map_err(ConvertError::encode)
                      })
}

/// As [`json`](fn.json.html), over raw bytes instead of text, for carriers
/// whose tokens are byte buffers.
pub fn json_bytes<V>() -> PartialIso<Vec<u8>, V>
    where V: Serialize + DeserializeOwned + 'static,
{
    PartialIso::named("json",
                      |b: &Vec<u8>| {
                          serde_json::from_slice(b).map(Some)
                              .map_err(ConvertError::decode)
                      },
                      |v: &V| {
                          serde_json::to_vec(v).map(Some)
                              .map_err(ConvertError::encode)
                      })
}
