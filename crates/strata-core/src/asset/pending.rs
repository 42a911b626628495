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

use super::{Prefab, ResolveError};
use crate::view::ResourcePath;
use flume::TryRecvError;

/// The outcome of one resolution.
pub type Resolution = Result<Box<dyn Prefab>, ResolveError>;

/// The layer-side half of one in-flight resolution.
///
/// Created together with its [`AssetCompleter`] by [`PendingAsset::channel`].
/// The owner polls it from its own thread; nothing ever blocks on it.
#[derive(Debug)]
pub struct PendingAsset {
    path: ResourcePath,
    receiver: flume::Receiver<Resolution>,
}

/// The resolver-side half of one in-flight resolution.
///
/// Completing consumes the completer, so a resolution completes at most once.
/// Dropping it without completing reports [`ResolveError::Abandoned`].
#[derive(Debug)]
pub struct AssetCompleter {
    path: ResourcePath,
    sender: flume::Sender<Resolution>,
}

impl PendingAsset {
    /// Creates a linked completer / pending pair for `path`.
    pub fn channel(path: ResourcePath) -> (AssetCompleter, PendingAsset) {
        let (sender, receiver) = flume::bounded(1);
        (
            AssetCompleter {
                path: path.clone(),
                sender,
            },
            PendingAsset { path, receiver },
        )
    }

    /// Creates a pending value that is already complete.
    ///
    /// Useful for resolvers that can answer synchronously (in-memory
    /// catalogs, tests).
    pub fn ready(path: ResourcePath, resolution: Resolution) -> PendingAsset {
        let (completer, pending) = Self::channel(path);
        completer.complete(resolution);
        pending
    }

    /// The path being resolved.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Takes the resolution if it is available.
    ///
    /// Returns `None` while the resolver is still working. Once this returns
    /// `Some`, the pending value is spent.
    pub fn poll(&self) -> Option<Resolution> {
        match self.receiver.try_recv() {
            Ok(resolution) => Some(resolution),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ResolveError::Abandoned {
                path: self.path.clone(),
            })),
        }
    }
}

impl AssetCompleter {
    /// The path being resolved.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Delivers the outcome to the pending side.
    ///
    /// If the pending side is gone the resolution is simply dropped.
    pub fn complete(self, resolution: Resolution) {
        if self.sender.send(resolution).is_err() {
            log::debug!(
                "Resolution of '{}' completed after its requester went away.",
                self.path
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{LayerInfo, ViewNode};
    use std::any::Any;
    use std::thread;
    use std::time::Duration;

    struct Blank;

    impl ViewNode for Blank {
        fn set_name(&mut self, _name: &str) {}
        fn attach_to(&mut self, _layer: &LayerInfo) {}
        fn detach(&mut self) {}
        fn reset_local_transform(&mut self) {}
        fn is_active(&self) -> bool {
            true
        }
        fn set_active(&mut self, _active: bool) {}
        fn destroy(self: Box<Self>) {}
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct BlankPrefab;

    impl Prefab for BlankPrefab {
        fn instantiate(&self) -> Box<dyn ViewNode> {
            Box::new(Blank)
        }
    }

    #[test]
    fn pending_until_completed() {
        let (completer, pending) = PendingAsset::channel(ResourcePath::from("ui/login"));
        assert!(pending.poll().is_none());

        completer.complete(Ok(Box::new(BlankPrefab)));
        assert!(matches!(pending.poll(), Some(Ok(_))));
    }

    #[test]
    fn dropped_completer_is_abandoned() {
        let (completer, pending) = PendingAsset::channel(ResourcePath::from("ui/shop"));
        drop(completer);

        match pending.poll() {
            Some(Err(ResolveError::Abandoned { path })) => assert_eq!(path.as_str(), "ui/shop"),
            Some(Ok(_)) => panic!("unexpected prefab"),
            other => panic!("unexpected state: {:?}", other.map(|r| r.err())),
        }
    }

    #[test]
    fn ready_is_immediately_available() {
        let path = ResourcePath::from("ui/missing");
        let pending = PendingAsset::ready(
            path.clone(),
            Err(ResolveError::NotFound { path: path.clone() }),
        );
        let err = pending
            .poll()
            .and_then(|r| r.err())
            .expect("error expected");
        assert_eq!(err.path(), &path);
        assert_eq!(err.to_string(), "no resource found at 'ui/missing'");
    }

    #[test]
    fn completion_from_worker_thread() {
        let (completer, pending) = PendingAsset::channel(ResourcePath::from("ui/bag"));
        let worker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            completer.complete(Ok(Box::new(BlankPrefab)));
        });
        worker.join().expect("worker panicked");

        let node = pending
            .poll()
            .expect("completed")
            .expect("resolved")
            .instantiate();
        assert!(node.as_any().downcast_ref::<Blank>().is_some());
    }

    #[test]
    fn completing_after_the_pending_side_is_gone_is_harmless() {
        let (completer, pending) = PendingAsset::channel(ResourcePath::from("ui/gone"));
        drop(pending);
        completer.complete(Ok(Box::new(BlankPrefab)));
    }
}
