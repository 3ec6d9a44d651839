//! Weft reads and writes little textual formats from one description.
//!
//! This crate re-exports the core building blocks from [`weft_core`] and
//! adds the batteries a real application wants:
//!
//! - Ready token shapes for [text segments], [command-line arguments],
//!   [URL requests], and [localized templates], each with literal and
//!   slot pieces of its own.
//! - Extra [isomorphisms] for values with an ecosystem codec: UUIDs and
//!   JSON payloads.
//!
//! The split lets small dependents take `weft_core` alone, with no
//! third-party codecs attached.
//!
//! [`weft_core`]: ../weft_core/index.html
//! [text segments]: text/index.html
//! [command-line arguments]: cli/index.html
//! [URL requests]: url/index.html
//! [localized templates]: localized/index.html
//! [isomorphisms]: iso/index.html

#![forbid(unsafe_code)]


// Re-export everything from the core crate. (Except items shadowed by ours,
// which are re-exported elsewhere.)
#[doc(no_inline)]
pub use weft_core::*;

/// Partial isomorphisms, with the premade ones of the core crate and the
/// codec-backed ones of this crate flattened in.
pub mod iso {
    #[doc(no_inline)]
    pub use weft_core::iso::{*, premade::*};

    mod codec;
    pub use codec::{json, json_bytes, uuid};
}

pub mod cli;
pub mod localized;
pub mod text;
pub mod url;
