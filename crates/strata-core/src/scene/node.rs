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

use super::LayerInfo;
use std::any::Any;

/// One instantiated view object living in the scene substrate.
///
/// A node is exclusively owned by the layer entry that instantiated it, from
/// instantiation until [`destroy`](Self::destroy) consumes it.
pub trait ViewNode: Any {
    /// Names the node (layers use the resource path).
    fn set_name(&mut self, name: &str);

    /// Re-parents the node under the root of `layer`, as its last child.
    fn attach_to(&mut self, layer: &LayerInfo);

    /// Removes the node from its parent without destroying it.
    fn detach(&mut self);

    /// Moves the node back to the origin of its parent, with no rotation.
    fn reset_local_transform(&mut self);

    /// Returns `true` if the node is active in the hierarchy.
    fn is_active(&self) -> bool;

    /// Shows or hides the node.
    fn set_active(&mut self, active: bool);

    /// Tears the node down for good.
    fn destroy(self: Box<Self>);

    /// Allows downcasting to the concrete node type.
    fn as_any(&self) -> &dyn Any;
}
