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

//! The boundary with the scene substrate a layer attaches its views to.
//!
//! How a node is drawn, composited, or laid out is none of the layer's
//! business. The layer only parents nodes under itself, resets their local
//! transform, toggles their activity, and destroys them.

mod layer;
mod node;

pub use layer::{LayerInfo, RenderMode};
pub use node::ViewNode;
