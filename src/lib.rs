#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for editing the chunk structure of PNG data.
//!
//! A PNG file is a fixed signature followed by a series of "chunks", and
//! each chunk is a length prefix, a 4-byte ASCII tag, a payload, and a CRC.
//! This crate parses that structure, lets you rewrite the chunk sequence
//! (currently: setting the physical pixel density, `pHYs`), and serializes
//! the result so that every untouched chunk comes back out byte-for-byte.
//! It never decompresses or otherwise interprets the pixel data.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

pub mod int_endian;
pub use int_endian::*;

mod error;
pub use error::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;
