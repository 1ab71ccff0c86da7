use std::collections::BTreeMap;
use std::fmt;

use crate::scroll::{RegionId, ScrollChange, ScrollRegion};

/// Handle of a sync group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u64);

impl GroupId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Callback run after a broadcast moved a member's offset
pub type ExternalUpdateFn = Box<dyn FnMut(&ScrollChange)>;

/// Lookup of mutable regions by id
///
/// The group never owns regions; whoever does lends them for a broadcast.
pub trait RegionStore {
    fn region_mut(&mut self, id: RegionId) -> Option<&mut ScrollRegion>;
}

impl RegionStore for BTreeMap<RegionId, ScrollRegion> {
    fn region_mut(&mut self, id: RegionId) -> Option<&mut ScrollRegion> {
        self.get_mut(&id)
    }
}

impl RegionStore for Vec<ScrollRegion> {
    fn region_mut(&mut self, id: RegionId) -> Option<&mut ScrollRegion> {
        self.iter_mut().find(|region| region.id() == id)
    }
}

struct Member {
    id: RegionId,
    on_external_update: Option<ExternalUpdateFn>,
}

pub struct SyncGroup {
    id: GroupId,
    members: Vec<Member>,
    horizontal: bool,
}

impl SyncGroup {
    /// `horizontal` also aligns left offsets; vertical is always aligned
    pub fn new(id: GroupId, horizontal: bool) -> Self {
        Self {
            id,
            members: Vec::new(),
            horizontal,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }

    /// Add a member, replacing the callback if it is already registered
    pub fn register(&mut self, id: RegionId, on_external_update: Option<ExternalUpdateFn>) {
        if let Some(member) = self.members.iter_mut().find(|m| m.id == id) {
            member.on_external_update = on_external_update;
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Region {:?} joins sync group {:?}", id, self.id);

        self.members.push(Member {
            id,
            on_external_update,
        });
    }

    /// Remove a member; returns whether it was present
    pub fn unregister(&mut self, id: RegionId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        let removed = self.members.len() != before;

        #[cfg(debug_assertions)]
        {
            if removed {
                log::debug!("Region {:?} leaves sync group {:?}", id, self.id);
            }
        }

        removed
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    pub fn members(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Map `change` onto every member except `source`
    ///
    /// Peers are moved to the source's offset ratio of their own max offset.
    /// The source is excluded up front, so its update is never echoed back.
    /// Returns the peer changes in member order.
    pub fn broadcast_from<S: RegionStore + ?Sized>(
        &mut self,
        source: RegionId,
        change: &ScrollChange,
        regions: &mut S,
    ) -> Vec<ScrollChange> {
        let ratio = change.ratio();
        let horizontal = self.horizontal;
        let mut applied = Vec::new();

        for member in self.members.iter_mut().filter(|m| m.id != source) {
            let Some(region) = regions.region_mut(member.id) else {
                continue;
            };

            let max = region.max_offset();
            let top = ratio.top * max.top;
            let left = if horizontal {
                ratio.left * max.left
            } else {
                region.offset().left
            };

            if let Some(peer_change) = region.apply_absolute(top, left) {
                if let Some(callback) = member.on_external_update.as_mut() {
                    callback(&peer_change);
                }
                applied.push(peer_change);
            }
        }

        applied
    }
}

impl fmt::Debug for SyncGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncGroup")
            .field("id", &self.id)
            .field("members", &self.members().collect::<Vec<_>>())
            .field("horizontal", &self.horizontal)
            .finish()
    }
}
