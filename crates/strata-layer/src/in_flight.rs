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

//! Bookkeeping for resolutions that have been started but not yet drained.

use crate::entry::Ticket;
use strata_core::asset::{PendingAsset, Resolution};
use strata_core::view::ResourcePath;

/// One resolution started for an entry, tagged with the ticket the entry held
/// at that moment.
#[derive(Debug)]
pub(crate) struct InFlight {
    pub(crate) path: ResourcePath,
    pub(crate) ticket: Ticket,
    pending: PendingAsset,
}

/// A resolution that has come back and is ready to be applied.
pub(crate) struct Completed {
    pub(crate) path: ResourcePath,
    pub(crate) ticket: Ticket,
    pub(crate) resolution: Resolution,
}

impl InFlight {
    pub(crate) fn new(path: ResourcePath, ticket: Ticket, pending: PendingAsset) -> Self {
        Self {
            path,
            ticket,
            pending,
        }
    }
}

/// Removes every finished resolution from `in_flight`, preserving the start
/// order of both the finished and the remaining ones.
pub(crate) fn drain_completed(in_flight: &mut Vec<InFlight>) -> Vec<Completed> {
    let mut completed = Vec::new();
    in_flight.retain(|flight| match flight.pending.poll() {
        Some(resolution) => {
            completed.push(Completed {
                path: flight.path.clone(),
                ticket: flight.ticket,
                resolution,
            });
            false
        }
        None => true,
    });
    completed
}
