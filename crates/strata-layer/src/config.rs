// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layer configuration.

use serde::Deserialize;
use strata_core::scene::{LayerInfo, RenderMode};

/// Represents the `[layer]` section of a layer configuration file.
///
/// Every field is optional in the file; missing ones take their
/// [`Default`] value.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LayerConfig {
    /// Name of the layer, used in logs and handed to nodes on attach.
    pub name: String,
    /// Draw order among layers.
    pub sort_order: i32,
    /// How the layer root is composited.
    pub render_mode: RenderMode,
    /// Whether destroying a view asks the resolver for a full unload of its
    /// backing resource.
    pub unload_on_destroy: bool,
}

impl LayerConfig {
    /// Creates a configuration for a layer called `name`, with defaults for
    /// everything else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the sort order.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Sets the render mode.
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Sets whether destroyed views fully unload their resource.
    pub fn with_unload_on_destroy(mut self, unload_on_destroy: bool) -> Self {
        self.unload_on_destroy = unload_on_destroy;
        self
    }

    /// The identity handed to nodes when they are attached.
    pub fn layer_info(&self) -> LayerInfo {
        LayerInfo {
            name: self.name.clone(),
            sort_order: self.sort_order,
            render_mode: self.render_mode,
        }
    }
}

impl Default for LayerConfig {
    /// Provides the configuration used when no file is present.
    ///
    /// A screen-space overlay layer called `default` at sort order 0 that
    /// fully unloads destroyed resources.
    fn default() -> Self {
        let info = LayerInfo::default();
        Self {
            name: info.name,
            sort_order: info.sort_order,
            render_mode: info.render_mode,
            unload_on_destroy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: LayerConfig = toml::from_str("name = \"dialog\"").expect("valid toml");
        assert_eq!(config.name, "dialog");
        assert_eq!(config.sort_order, 0);
        assert_eq!(config.render_mode, RenderMode::ScreenSpaceOverlay);
        assert!(config.unload_on_destroy);
    }

    #[test]
    fn full_section_parses() {
        let config: LayerConfig = toml::from_str(
            r#"
            name = "world-hud"
            sort_order = 30
            render_mode = "world_space"
            unload_on_destroy = false
            "#,
        )
        .expect("valid toml");

        assert_eq!(
            config,
            LayerConfig::named("world-hud")
                .with_sort_order(30)
                .with_render_mode(RenderMode::WorldSpace)
                .with_unload_on_destroy(false)
        );
    }

    #[test]
    fn layer_info_mirrors_config() {
        let info = LayerConfig::named("popup").with_sort_order(5).layer_info();
        assert_eq!(info.name, "popup");
        assert_eq!(info.sort_order, 5);
        assert_eq!(info.render_mode, RenderMode::ScreenSpaceOverlay);
    }
}
