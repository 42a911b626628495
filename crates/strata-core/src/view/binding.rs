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

use super::{ResourcePath, UiId, ViewCallbacks, ViewHandle, ViewParams};

/// A read-only view of the entry that owns an instance.
///
/// Delegates and callbacks receive a binding instead of the entry itself, so
/// they can read everything the caller supplied without ever reaching the
/// layer's tables. A binding is rebuilt for every notification, so it always
/// reflects the entry's current handle and logical id even after the entry has
/// been re-armed by a later open.
#[derive(Debug, Clone, Copy)]
pub struct ViewBinding<'a> {
    handle: ViewHandle,
    path: &'a ResourcePath,
    ui_id: UiId,
    params: &'a ViewParams,
    callbacks: &'a ViewCallbacks,
}

impl<'a> ViewBinding<'a> {
    /// Builds a binding from the entry's fields.
    pub fn new(
        handle: ViewHandle,
        path: &'a ResourcePath,
        ui_id: UiId,
        params: &'a ViewParams,
        callbacks: &'a ViewCallbacks,
    ) -> Self {
        Self {
            handle,
            path,
            ui_id,
            params,
            callbacks,
        }
    }

    /// The handle minted by the open that armed this entry.
    pub fn handle(&self) -> ViewHandle {
        self.handle
    }

    /// The backing resource path.
    pub fn path(&self) -> &'a ResourcePath {
        self.path
    }

    /// The logical UI id supplied by the caller.
    pub fn ui_id(&self) -> UiId {
        self.ui_id
    }

    /// The caller-supplied parameters.
    pub fn params(&self) -> &'a ViewParams {
        self.params
    }

    /// The caller-supplied lifecycle hooks.
    pub fn callbacks(&self) -> &'a ViewCallbacks {
        self.callbacks
    }
}
