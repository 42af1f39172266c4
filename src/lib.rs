pub mod document;
pub mod error;
pub mod logging;
mod untyped;

pub use document::{Document, Foo, PaintEntry, Quux};
pub use error::{Error, Result};
pub use untyped::path::JsonPath;

use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Document every run starts from
pub const INPUT: &str = r#"{
    "foo": {
        "bar": [
            {"paint": "red"},
            {"paint": "green"},
            {"paint": "blue"}
        ]
    }
}"#;

/// Index into `foo.bar` of the color that gets printed
pub const PAINT_INDEX: usize = 1;

/// Decodes JSON text into a Document
pub fn decode(text: &str) -> Result<Document> {
    serde_json::from_str(text).map_err(Error::Decode)
}

/// Encodes a Document (or any serializable value) as JSON indented by two spaces
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::Encode)
}

/// Runs the round trip over [`INPUT`]
pub fn run<W: Write>(out: &mut W) -> Result<Document> {
    run_with(INPUT, out)
}

/// Decodes `text`, prints the color at `foo.bar[1]`, fills `quux`
/// and prints the re-encoded document.
///
/// Nothing is written to `out` when decoding fails.
pub fn run_with<W: Write>(text: &str, out: &mut W) -> Result<Document> {
    let mut document = decode(text)?;
    debug!(entries = document.foo.bar.len(), "decoded document");

    let color = document.paint_color(PAINT_INDEX)?;
    debug!(index = PAINT_INDEX, color, "read paint color");
    writeln!(out, "paint color: {color}")?;

    document.fill_quux();
    debug!(stuff = %document.quux.stuff, nums = ?document.quux.nums, "filled quux");

    let encoded = encode_pretty(&document)?;
    debug!(bytes = encoded.len(), "encoded document");
    writeln!(out, "{encoded}")?;

    Ok(document)
}

/// Same round trip as [`run`], without a schema
pub fn run_untyped<W: Write>(out: &mut W) -> Result<Value> {
    run_untyped_with(INPUT, out)
}

pub fn run_untyped_with<W: Write>(text: &str, out: &mut W) -> Result<Value> {
    let mut json = untyped::decode_value(text)?;
    debug!("decoded value");

    let path = untyped::paint_path(PAINT_INDEX);
    let color = untyped::read_str(&json, &path)?;
    debug!(%path, color, "read paint color");
    writeln!(out, "paint color: {color}")?;

    untyped::insert_quux(&mut json)?;
    debug!("inserted quux");

    let encoded = encode_pretty(&json)?;
    debug!(bytes = encoded.len(), "encoded value");
    writeln!(out, "{encoded}")?;

    Ok(json)
}
