use crate::geometry::{x_to_index, Padding};

/// The sample under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub index: usize,
    pub value: f64,
}

impl Hover {
    /// Tooltip text for a throughput sample, value verbatim.
    pub fn tooltip(&self) -> String {
        format!("{} TP", self.value)
    }
}

/// Maps a pointer x on the chart surface to a sample.
///
/// Uses the chart's own padding and width so its answer matches what the
/// chart draws.
#[derive(Debug, Clone, Copy)]
pub struct HoverResolver {
    padding: Padding,
}

impl HoverResolver {
    pub fn new(padding: Padding) -> Self {
        Self { padding }
    }

    /// Resolve against the snapshot about to be drawn.  `None` when empty.
    pub fn resolve(&self, x: f32, width: f32, samples: &[f64]) -> Option<Hover> {
        let index = x_to_index(x, samples.len(), width, self.padding)?;
        Some(Hover {
            index,
            value: samples[index],
        })
    }
}
