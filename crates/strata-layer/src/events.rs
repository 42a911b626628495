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

//! Notifications a layer publishes about its views.
//!
//! A [`LayerController`](crate::LayerController) given a sender through
//! [`with_event_sender`](crate::LayerController::with_event_sender) reports
//! every attach, detach, failed resolution, and rejected open. The composition
//! root owns a [`LayerEventBus`] and drains it once per frame, e.g. to keep track
//! of which logical views are currently on screen.

use strata_core::asset::ResolveError;
use strata_core::view::{ResourcePath, UiId, ViewHandle};

/// Something that happened to a view of a layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerEvent {
    /// A view's node was attached under the layer root.
    Attached {
        /// Name of the layer.
        layer: String,
        /// Handle of the open that attached.
        handle: ViewHandle,
        /// Logical id of the open.
        ui_id: UiId,
        /// Backing resource.
        path: ResourcePath,
    },
    /// A view left the layer.
    Detached {
        /// Name of the layer.
        layer: String,
        /// Handle of the open that was closed.
        handle: ViewHandle,
        /// Logical id of the open.
        ui_id: UiId,
        /// Backing resource.
        path: ResourcePath,
        /// Whether the node was destroyed rather than cached.
        destroyed: bool,
    },
    /// The resolver failed; the view stays registered without a node.
    ResolveFailed {
        /// Name of the layer.
        layer: String,
        /// Handle of the open whose resolution failed.
        handle: ViewHandle,
        /// The resolver's error.
        error: ResolveError,
    },
    /// An open was rejected because the resource is already open.
    DuplicateOpen {
        /// Name of the layer.
        layer: String,
        /// Logical id of the rejected open.
        ui_id: UiId,
        /// Backing resource.
        path: ResourcePath,
    },
}

/// Owner side of the layer event channel.
#[derive(Debug)]
pub struct LayerEventBus {
    sender: flume::Sender<LayerEvent>,
    receiver: flume::Receiver<LayerEvent>,
}

impl LayerEventBus {
    /// Creates a new bus with an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::debug!("Layer event bus initialized.");
        Self { sender, receiver }
    }

    /// Returns a sender to hand to one or more layers.
    pub fn sender(&self) -> flume::Sender<LayerEvent> {
        self.sender.clone()
    }

    /// Takes every event published so far, oldest first.
    pub fn drain(&self) -> Vec<LayerEvent> {
        self.receiver.try_iter().collect()
    }

    /// Returns `true` if no event is waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for LayerEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn duplicate(path: &str) -> LayerEvent {
        LayerEvent::DuplicateOpen {
            layer: "test".to_string(),
            ui_id: UiId(1),
            path: ResourcePath::from(path),
        }
    }

    #[test]
    fn drain_is_fifo_and_empties_the_bus() {
        let bus = LayerEventBus::new();
        let sender = bus.sender();

        sender.send(duplicate("ui/a")).expect("send");
        sender.send(duplicate("ui/b")).expect("send");

        assert_eq!(bus.drain(), vec![duplicate("ui/a"), duplicate("ui/b")]);
        assert!(bus.is_empty());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn events_from_another_thread_arrive() {
        let bus = LayerEventBus::default();
        let sender = bus.sender();

        thread::spawn(move || {
            sender
                .send(duplicate("ui/remote"))
                .expect("send from thread");
        })
        .join()
        .expect("thread join failed");

        assert_eq!(bus.drain(), vec![duplicate("ui/remote")]);
    }
}
