//! Canonical JSON rendering
//!
//! Single-line output with `", "` between items and `": "` between a key and
//! its value. With `ensure_ascii` every non-ASCII character (and DEL) inside
//! strings is written as a `\uXXXX` escape, using surrogate pairs outside the
//! Basic Multilingual Plane. Numbers are written with their source text.

use crate::document::Document;
use crate::error::{ConvertError, Result};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{Formatter, Serializer};
use std::io;

#[derive(Debug, Clone, Copy)]
pub struct SpacedFormatter {
    ensure_ascii: bool,
}

impl SpacedFormatter {
    pub fn new(ensure_ascii: bool) -> Self {
        Self { ensure_ascii }
    }
}

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ensure_ascii || fragment.bytes().all(|b| b.is_ascii() && b != 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\x7f' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Render `document` as canonical JSON text.
pub fn to_canonical_json(document: &Document, ensure_ascii: bool) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter::new(ensure_ascii));
    document.serialize(&mut ser)?;
    into_text(buf)
}

fn into_text(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf)
        .map_err(|e| ConvertError::Serialize(serde_json::Error::custom(e.utf8_error())))
}
