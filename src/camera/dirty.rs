//! Dirty tracking for derived camera values.
//!
//! Levels nest: anything stale at [`DirtyLevel::Angle`] is also stale at
//! `Scale` and `Position`. Marking only ever raises the level; resolving
//! drains it back to [`DirtyLevel::Clean`].

/// Highest stale stage of the derived camera state.
///
/// - `Position` – translation (and therefore the inverse) is stale
/// - `Scale` – composed scale, virtual fit, projection and local bounds too
/// - `Angle` – rotation trig too
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirtyLevel {
    #[default]
    Clean,
    Position,
    Scale,
    Angle,
}

impl DirtyLevel {
    /// Raise the level to at least `level`.
    pub fn mark(&mut self, level: DirtyLevel) {
        if level > *self {
            *self = level;
        }
    }

    /// Return the current level and reset to `Clean`.
    pub fn take(&mut self) -> DirtyLevel {
        std::mem::take(self)
    }

    pub fn is_clean(&self) -> bool {
        *self == DirtyLevel::Clean
    }

    /// True when a stage at `stage` must be recomputed.
    pub fn covers(&self, stage: DirtyLevel) -> bool {
        stage != DirtyLevel::Clean && *self >= stage
    }
}
