//! Simulation layer an agent belongs to.
//!
//! Layer membership is fixed at creation.  Agents only ever see neighbors in
//! their own layer: interactive fish ignore the background school and vice
//! versa.

/// Which population an agent flocks with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Foreground agents; flock by species and repel other species.
    #[default]
    Interactive,
    /// Decorative agents; flock with every other background agent
    /// regardless of species.
    Background,
}

impl Layer {
    #[inline]
    pub fn is_background(self) -> bool {
        matches!(self, Layer::Background)
    }

    /// Human-readable label, useful for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Interactive => "interactive",
            Layer::Background  => "background",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
