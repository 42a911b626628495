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

//! The descriptor of one logical view and the instance it owns.

use strata_core::delegate::InstanceDelegate;
use strata_core::scene::{LayerInfo, ViewNode};
use strata_core::view::{ResourcePath, UiId, ViewBinding, ViewCallbacks, ViewHandle, ViewParams};

/// Generation stamp of one arming of an entry.
///
/// Every accepted open draws a new ticket. An in-flight resolution remembers
/// the ticket it was started for, and only a completion carrying the entry's
/// current ticket may attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub(crate) struct Ticket(u64);

impl Ticket {
    /// Advances to the next ticket and returns it.
    pub(crate) fn advance(&mut self) -> Ticket {
        self.0 += 1;
        *self
    }
}

/// A node together with the delegate bound to it at instantiation.
pub(crate) struct ViewInstance {
    node: Box<dyn ViewNode>,
    delegate: Box<dyn InstanceDelegate>,
    attached: bool,
}

impl ViewInstance {
    pub(crate) fn new(node: Box<dyn ViewNode>, delegate: Box<dyn InstanceDelegate>) -> Self {
        Self {
            node,
            delegate,
            attached: false,
        }
    }
}

/// The full descriptor of one logical view.
///
/// Entries are passive: only the owning [`LayerController`](crate::LayerController)
/// mutates them, and the outside world reads them through getters or through
/// a [`ViewBinding`].
pub struct ViewEntry {
    handle: ViewHandle,
    path: ResourcePath,
    ui_id: UiId,
    params: ViewParams,
    callbacks: ViewCallbacks,
    instance: Option<ViewInstance>,
    valid: bool,
    ticket: Ticket,
}

impl ViewEntry {
    pub(crate) fn new(path: ResourcePath) -> Self {
        Self {
            handle: ViewHandle::EMPTY,
            path,
            ui_id: UiId(0),
            params: ViewParams::new(),
            callbacks: ViewCallbacks::new(),
            instance: None,
            valid: false,
            ticket: Ticket::default(),
        }
    }

    /// The handle minted by the latest accepted open.
    pub fn handle(&self) -> ViewHandle {
        self.handle
    }

    /// The backing resource path.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The logical id supplied by the latest accepted open.
    pub fn ui_id(&self) -> UiId {
        self.ui_id
    }

    /// The parameters supplied by the latest accepted open.
    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// `true` while the entry represents a currently open view.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `true` once the entry owns an instantiated node.
    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }

    /// `true` while the owned node is parented under the layer root.
    pub fn is_attached(&self) -> bool {
        self.instance
            .as_ref()
            .is_some_and(|instance| instance.attached)
    }

    /// The read-only binding handed to delegates and callbacks.
    pub fn binding(&self) -> ViewBinding<'_> {
        ViewBinding::new(
            self.handle,
            &self.path,
            self.ui_id,
            &self.params,
            &self.callbacks,
        )
    }

    pub(crate) fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub(crate) fn node(&self) -> Option<&dyn ViewNode> {
        self.instance
            .as_ref()
            .map(|instance| instance.node.as_ref())
    }

    pub(crate) fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Re-arms the entry for a new open. Hooks from the previous open are
    /// dropped before the new ones are installed.
    pub(crate) fn rearm(
        &mut self,
        handle: ViewHandle,
        ui_id: UiId,
        params: ViewParams,
        callbacks: ViewCallbacks,
        ticket: Ticket,
    ) {
        self.handle = handle;
        self.ui_id = ui_id;
        self.params = params;
        self.callbacks = callbacks;
        self.ticket = ticket;
        self.valid = true;
    }

    /// Re-arms the entry for another resolution attempt of the same open.
    pub(crate) fn rearm_ticket(&mut self, ticket: Ticket) {
        self.ticket = ticket;
        self.valid = true;
    }

    pub(crate) fn install(&mut self, instance: ViewInstance) {
        debug_assert!(self.instance.is_none(), "entry already owns an instance");
        self.instance = Some(instance);
    }

    /// Parents the owned node under `layer`, resets it, shows it, and notifies
    /// its delegate. Returns `false` if there is no node to attach.
    pub(crate) fn attach(&mut self, layer: &LayerInfo) -> bool {
        let Some(instance) = self.instance.as_mut() else {
            return false;
        };
        let binding = ViewBinding::new(
            self.handle,
            &self.path,
            self.ui_id,
            &self.params,
            &self.callbacks,
        );

        instance.node.attach_to(layer);
        instance.node.reset_local_transform();
        if !instance.node.is_active() {
            instance.node.set_active(true);
        }
        instance.attached = true;
        instance
            .delegate
            .on_attach(&binding, instance.node.as_mut());
        self.valid = true;
        true
    }

    /// Takes the node out of the layer and marks the entry invalid.
    ///
    /// With `destroy` the node is destroyed and dropped; otherwise it is hidden
    /// and kept. Returns `true` if a node was owned (and therefore destroyed,
    /// when `destroy` is set).
    pub(crate) fn detach(&mut self, destroy: bool) -> bool {
        self.valid = false;

        if destroy {
            let Some(mut instance) = self.instance.take() else {
                return false;
            };
            if instance.attached {
                let binding = self.binding();
                instance
                    .delegate
                    .on_detach(&binding, instance.node.as_mut(), true);
            }
            instance.node.destroy();
            return true;
        }

        let Some(instance) = self.instance.as_mut() else {
            return false;
        };
        if instance.attached {
            let binding = ViewBinding::new(
                self.handle,
                &self.path,
                self.ui_id,
                &self.params,
                &self.callbacks,
            );
            instance
                .delegate
                .on_detach(&binding, instance.node.as_mut(), false);
            instance.node.set_active(false);
            instance.node.detach();
            instance.attached = false;
        }
        true
    }
}

impl std::fmt::Debug for ViewEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewEntry")
            .field("handle", &self.handle)
            .field("path", &self.path)
            .field("ui_id", &self.ui_id)
            .field("params", &self.params)
            .field("callbacks", &self.callbacks)
            .field("has_instance", &self.instance.is_some())
            .field("attached", &self.is_attached())
            .field("valid", &self.valid)
            .finish()
    }
}
