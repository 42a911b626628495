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

use serde::{Deserialize, Serialize};

/// How a layer's root is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Drawn on top of everything, in screen space.
    #[default]
    ScreenSpaceOverlay,
    /// Drawn in screen space, in front of a camera.
    ScreenSpaceCamera,
    /// Placed in the world like any other object.
    WorldSpace,
}

/// Identifies the layer root a node is attached under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerInfo {
    /// Name of the layer (e.g. `"game"`, `"dialog"`).
    pub name: String,
    /// Draw order among layers; higher values draw later.
    pub sort_order: i32,
    /// How the layer root is composited.
    pub render_mode: RenderMode,
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            sort_order: 0,
            render_mode: RenderMode::default(),
        }
    }
}
