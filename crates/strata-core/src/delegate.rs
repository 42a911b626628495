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

//! Per-instance lifecycle hooks.
//!
//! Every instantiated node gets exactly one [`InstanceDelegate`], created by a
//! [`DelegateFactory`] at the moment the node is instantiated. The delegate
//! never sees the layer's tables; it only receives a read-only
//! [`ViewBinding`] describing the entry that owns the node.

use crate::scene::ViewNode;
use crate::view::ViewBinding;

/// Receives attach and detach notifications for one instance.
pub trait InstanceDelegate {
    /// The node has been parented under the layer root and activated.
    fn on_attach(&mut self, binding: &ViewBinding<'_>, node: &mut dyn ViewNode);

    /// The node is leaving the layer.
    ///
    /// When `destroyed` is `true` the node is destroyed right after this call.
    /// Otherwise it is hidden and kept for a later re-open.
    fn on_detach(&mut self, binding: &ViewBinding<'_>, node: &mut dyn ViewNode, destroyed: bool);
}

/// Builds the delegate bound to a freshly instantiated node.
pub trait DelegateFactory {
    /// Creates the delegate for the entry described by `binding`.
    fn create(&self, binding: &ViewBinding<'_>) -> Box<dyn InstanceDelegate>;
}

impl<F> DelegateFactory for F
where
    F: Fn(&ViewBinding<'_>) -> Box<dyn InstanceDelegate>,
{
    fn create(&self, binding: &ViewBinding<'_>) -> Box<dyn InstanceDelegate> {
        self(binding)
    }
}
