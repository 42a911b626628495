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

use super::ViewBinding;
use std::fmt;

/// A lifecycle hook. It receives the binding of the view it fires for.
///
/// Hooks are `Fn`; callers that need to mutate state capture a cell or a channel.
pub type ViewCallback = Box<dyn Fn(&ViewBinding<'_>) + Send + Sync>;

/// The set of lifecycle hooks a caller attaches to one open of a view.
///
/// A layer replaces the whole set on every open, so hooks from a previous
/// owner of the same resource never fire for the new one.
#[derive(Default)]
pub struct ViewCallbacks {
    on_added: Option<ViewCallback>,
    on_before_remove: Option<ViewCallback>,
    on_removed: Option<ViewCallback>,
}

impl ViewCallbacks {
    /// Creates an empty set of hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook fired once the view is attached and visible-eligible.
    pub fn on_added(mut self, callback: impl Fn(&ViewBinding<'_>) + Send + Sync + 'static) -> Self {
        self.on_added = Some(Box::new(callback));
        self
    }

    /// Sets the hook fired right before the view is detached.
    pub fn on_before_remove(
        mut self,
        callback: impl Fn(&ViewBinding<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on_before_remove = Some(Box::new(callback));
        self
    }

    /// Sets the hook fired as the view leaves the layer, after `on_before_remove`.
    ///
    /// The node is still parented and active when it runs; it is hidden and
    /// unparented (or destroyed) once the hook returns.
    pub fn on_removed(
        mut self,
        callback: impl Fn(&ViewBinding<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on_removed = Some(Box::new(callback));
        self
    }

    /// Fires the `on_added` hook, if any.
    pub fn fire_added(&self, binding: &ViewBinding<'_>) {
        if let Some(callback) = &self.on_added {
            callback(binding);
        }
    }

    /// Fires the `on_before_remove` hook, if any.
    pub fn fire_before_remove(&self, binding: &ViewBinding<'_>) {
        if let Some(callback) = &self.on_before_remove {
            callback(binding);
        }
    }

    /// Fires the `on_removed` hook, if any.
    pub fn fire_removed(&self, binding: &ViewBinding<'_>) {
        if let Some(callback) = &self.on_removed {
            callback(binding);
        }
    }

    /// Returns `true` if no hook is set.
    pub fn is_empty(&self) -> bool {
        self.on_added.is_none() && self.on_before_remove.is_none() && self.on_removed.is_none()
    }
}

struct DebugifyOption<'a, T>(&'a Option<T>);

impl<T> fmt::Debug for DebugifyOption<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            write!(f, "Some(..)")
        } else {
            write!(f, "None")
        }
    }
}

impl fmt::Debug for ViewCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCallbacks")
            .field("on_added", &DebugifyOption(&self.on_added))
            .field("on_before_remove", &DebugifyOption(&self.on_before_remove))
            .field("on_removed", &DebugifyOption(&self.on_removed))
            .finish()
    }
}
