//! Named parallax layers.
//!
//! Maps layer names (e.g. `"background"`) to depths so content can refer to
//! layers by name. Filled from the `[layers]` section of
//! [`CameraConfig`](super::cameraconfig::CameraConfig) and replaced by
//! [`apply_camera_config_changes`](crate::systems::cameraconfig::apply_camera_config_changes)
//! whenever the config changes.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Clone, Default)]
pub struct ParallaxLayers {
    depths: FxHashMap<String, f32>,
}

impl ParallaxLayers {
    pub fn from_map(depths: FxHashMap<String, f32>) -> Self {
        Self { depths }
    }

    pub fn depth(&self, name: &str) -> Option<f32> {
        self.depths.get(name).copied()
    }

    /// Layers ordered deepest first, ties broken by name.
    pub fn sorted(&self) -> Vec<(&str, f32)> {
        let mut layers: Vec<(&str, f32)> = self
            .depths
            .iter()
            .map(|(name, z)| (name.as_str(), *z))
            .collect();
        layers.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        layers
    }

    /// All layer depths, deepest first.
    pub fn sorted_depths(&self) -> Vec<f32> {
        self.sorted().into_iter().map(|(_, z)| z).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(entries: &[(&str, f32)]) -> ParallaxLayers {
        ParallaxLayers::from_map(
            entries
                .iter()
                .map(|(name, z)| (name.to_string(), *z))
                .collect(),
        )
    }

    #[test]
    fn test_lookup() {
        let layers = layers(&[("sky", -5.0), ("ground", 0.0)]);
        assert_eq!(layers.depth("sky"), Some(-5.0));
        assert_eq!(layers.depth("missing"), None);
    }

    #[test]
    fn test_sorted_breaks_ties_by_name() {
        let layers = layers(&[("b", 0.5), ("hills", -3.0), ("a", 0.5), ("ground", 0.0)]);
        assert_eq!(
            layers.sorted(),
            vec![("hills", -3.0), ("ground", 0.0), ("a", 0.5), ("b", 0.5)]
        );
        assert_eq!(layers.sorted_depths(), vec![-3.0, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_empty() {
        let layers = ParallaxLayers::default();
        assert!(layers.sorted().is_empty());
        assert_eq!(layers.depth("ground"), None);
    }
}
