use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Text written into `quux.stuff` by [`Document::fill_quux`]
pub const QUUX_STUFF: &str = "nonsense";

/// Numbers written into `quux.nums` by [`Document::fill_quux`]
pub const QUUX_NUMS: [f64; 2] = [2.718, 3.142];

/// Top-level document: `{"foo": {...}, "quux": {...}}`
///
/// Field order here is the key order of the encoded text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub foo: Foo,
    /// Absent from the input, so it decodes to its empty value
    #[serde(default)]
    pub quux: Quux,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Foo {
    pub bar: Vec<PaintEntry>,
}

/// One `{"paint": "<color>"}` object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaintEntry {
    pub paint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Quux {
    #[serde(default)]
    pub stuff: String,
    #[serde(default)]
    pub nums: Vec<f64>,
}

impl PaintEntry {
    pub fn new(paint: &str) -> Self {
        PaintEntry {
            paint: paint.to_string(),
        }
    }
}

impl Document {
    /// Color at `foo.bar[index].paint`
    pub fn paint_color(&self, index: usize) -> Result<&str> {
        self.foo
            .bar
            .get(index)
            .map(|entry| entry.paint.as_str())
            .ok_or(Error::Index {
                index,
                len: self.foo.bar.len(),
            })
    }

    /// Replace both `quux` fields, keeping `nums` in the given order
    pub fn set_quux(&mut self, stuff: &str, nums: &[f64]) {
        self.quux.stuff = stuff.to_string();
        self.quux.nums = nums.to_vec();
    }

    pub fn fill_quux(&mut self) {
        self.set_quux(QUUX_STUFF, &QUUX_NUMS);
    }
}
