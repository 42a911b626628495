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

//! Test doubles shared by the layer integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use strata_core::asset::{AssetCompleter, AssetResolver, PendingAsset, Prefab, ResolveError};
use strata_core::delegate::InstanceDelegate;
use strata_core::scene::{LayerInfo, ViewNode};
use strata_core::view::{ResourcePath, ViewBinding};
use strata_layer::{LayerConfig, LayerController};

/// Everything nodes report about themselves, shared across threads.
#[derive(Debug, Default)]
pub struct NodeLog {
    pub instantiated: u32,
    pub destroyed: Vec<u32>,
}

pub type SharedNodeLog = Arc<Mutex<NodeLog>>;

#[derive(Debug)]
pub struct TestNode {
    pub id: u32,
    pub name: String,
    pub parent: Option<String>,
    pub active: bool,
    pub transform_resets: u32,
    log: SharedNodeLog,
}

impl ViewNode for TestNode {
    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn attach_to(&mut self, layer: &LayerInfo) {
        self.parent = Some(layer.name.clone());
    }

    fn detach(&mut self) {
        self.parent = None;
    }

    fn reset_local_transform(&mut self) {
        self.transform_resets += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn destroy(self: Box<Self>) {
        self.log.lock().unwrap().destroyed.push(self.id);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct TestPrefab {
    log: SharedNodeLog,
}

impl Prefab for TestPrefab {
    fn instantiate(&self) -> Box<dyn ViewNode> {
        let mut log = self.log.lock().unwrap();
        log.instantiated += 1;
        Box::new(TestNode {
            id: log.instantiated,
            name: String::new(),
            parent: None,
            // Prefabs are authored hidden; attaching must activate them.
            active: false,
            transform_resets: 0,
            log: self.log.clone(),
        })
    }
}

#[derive(Default)]
struct MockState {
    requests: Vec<String>,
    waiting: Vec<AssetCompleter>,
    releases: Vec<(String, bool)>,
}

/// A resolver whose resolutions complete only when the test says so.
#[derive(Default)]
pub struct MockResolver {
    state: RefCell<MockState>,
    nodes: SharedNodeLog,
}

impl MockResolver {
    /// Completes the oldest waiting resolution of `path` with a prefab.
    pub fn complete(&self, path: &str) {
        let completer = self.take_oldest(path);
        completer.complete(Ok(Box::new(TestPrefab {
            log: self.nodes.clone(),
        })));
    }

    /// Completes the oldest waiting resolution of `path` with an error.
    pub fn fail(&self, path: &str) {
        let completer = self.take_oldest(path);
        let path = completer.path().clone();
        completer.complete(Err(ResolveError::Load {
            path,
            reason: "corrupt bundle".to_string(),
        }));
    }

    /// Completes everything that is waiting, oldest first.
    pub fn complete_all(&self) {
        let waiting: Vec<AssetCompleter> = self.state.borrow_mut().waiting.drain(..).collect();
        for completer in waiting {
            completer.complete(Ok(Box::new(TestPrefab {
                log: self.nodes.clone(),
            })));
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }

    pub fn waiting(&self) -> usize {
        self.state.borrow().waiting.len()
    }

    pub fn releases(&self) -> Vec<(String, bool)> {
        self.state.borrow().releases.clone()
    }

    pub fn instantiated(&self) -> u32 {
        self.nodes.lock().unwrap().instantiated
    }

    pub fn destroyed(&self) -> Vec<u32> {
        self.nodes.lock().unwrap().destroyed.clone()
    }

    fn take_oldest(&self, path: &str) -> AssetCompleter {
        let mut state = self.state.borrow_mut();
        let index = state
            .waiting
            .iter()
            .position(|completer| completer.path().as_str() == path)
            .unwrap_or_else(|| panic!("no resolution of '{path}' is waiting"));
        state.waiting.remove(index)
    }
}

impl AssetResolver for MockResolver {
    fn resolve_async(&mut self, path: &ResourcePath) -> PendingAsset {
        let (completer, pending) = PendingAsset::channel(path.clone());
        let state = self.state.get_mut();
        state.requests.push(path.to_string());
        state.waiting.push(completer);
        pending
    }

    fn release(&mut self, path: &ResourcePath, full_unload: bool) {
        self.state
            .get_mut()
            .releases
            .push((path.to_string(), full_unload));
    }
}

pub type DelegateLog = Arc<Mutex<Vec<String>>>;

/// Records every notification as `"attach <path> <ui_id>"` or
/// `"detach <path> <destroyed>"`.
pub struct RecordingDelegate {
    log: DelegateLog,
}

impl InstanceDelegate for RecordingDelegate {
    fn on_attach(&mut self, binding: &ViewBinding<'_>, _node: &mut dyn ViewNode) {
        self.log
            .lock()
            .unwrap()
            .push(format!("attach {} {}", binding.path(), binding.ui_id().0));
        binding.callbacks().fire_added(binding);
    }

    fn on_detach(&mut self, binding: &ViewBinding<'_>, _node: &mut dyn ViewNode, destroyed: bool) {
        self.log
            .lock()
            .unwrap()
            .push(format!("detach {} {}", binding.path(), destroyed));
        binding.callbacks().fire_removed(binding);
    }
}

/// A layer over a [`MockResolver`] with the default callback delegates.
pub fn layer() -> LayerController<MockResolver> {
    LayerController::new(LayerConfig::named("test"), MockResolver::default())
}

/// A layer over a [`MockResolver`] whose delegates record into the returned log.
pub fn recording_layer() -> (LayerController<MockResolver>, DelegateLog) {
    let log = DelegateLog::default();
    let factory_log = log.clone();
    let layer = layer().with_delegate_factory(move |_binding: &ViewBinding<'_>| {
        Box::new(RecordingDelegate {
            log: factory_log.clone(),
        }) as Box<dyn InstanceDelegate>
    });
    (layer, log)
}

/// Downcasts a node returned by a lookup.
pub fn test_node(node: &dyn ViewNode) -> &TestNode {
    node.as_any()
        .downcast_ref::<TestNode>()
        .expect("layer should only hold test nodes")
}

pub fn entries(log: &DelegateLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
