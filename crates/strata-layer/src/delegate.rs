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

//! The default per-instance delegate.

use strata_core::delegate::{DelegateFactory, InstanceDelegate};
use strata_core::scene::ViewNode;
use strata_core::view::ViewBinding;

/// Forwards attach and detach notifications to the entry's [`ViewCallbacks`].
///
/// `on_added` fires on attach; `on_before_remove` then `on_removed` fire on
/// detach, whether or not the node is destroyed. Both removal hooks run while
/// the node is still parented under the layer.
///
/// [`ViewCallbacks`]: strata_core::view::ViewCallbacks
#[derive(Debug, Default, Clone, Copy)]
pub struct CallbackDelegate;

impl InstanceDelegate for CallbackDelegate {
    fn on_attach(&mut self, binding: &ViewBinding<'_>, _node: &mut dyn ViewNode) {
        binding.callbacks().fire_added(binding);
    }

    fn on_detach(&mut self, binding: &ViewBinding<'_>, _node: &mut dyn ViewNode, destroyed: bool) {
        log::trace!(
            "Detaching '{}' ({}), destroyed: {}",
            binding.path(),
            binding.handle(),
            destroyed
        );
        binding.callbacks().fire_before_remove(binding);
        binding.callbacks().fire_removed(binding);
    }
}

/// Builds a [`CallbackDelegate`] for every instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallbackDelegateFactory;

impl DelegateFactory for CallbackDelegateFactory {
    fn create(&self, _binding: &ViewBinding<'_>) -> Box<dyn InstanceDelegate> {
        Box::new(CallbackDelegate)
    }
}
