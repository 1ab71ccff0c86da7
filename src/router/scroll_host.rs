use std::collections::BTreeMap;

use super::hit_test::{ScrollbarPart, hit_test};
use super::input_event::InputEvent;
use crate::config::{ScrollConfig, ScrollbarMode};
use crate::geometry::{Direction, Point, Rect, Size};
use crate::render::RenderModel;
use crate::scroll::{RegionId, ScrollChange, ScrollRegion};
use crate::sync::{ExternalUpdateFn, GroupId, SyncGroup};

/// Owner of all mounted regions and sync groups
///
/// Each region is only ever written through its own methods, called from
/// here; groups reach peers through the same entry points.
#[derive(Debug, Default)]
pub struct ScrollHost {
    regions: BTreeMap<RegionId, ScrollRegion>,
    groups: BTreeMap<GroupId, SyncGroup>,
    membership: BTreeMap<RegionId, GroupId>,
    next_region: u64,
    next_group: u64,
    active_drag: Option<RegionId>,
}

impl ScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a region; it stays unmeasured until bounds and content arrive
    pub fn mount(&mut self, config: ScrollConfig) -> RegionId {
        self.next_region += 1;
        let id = RegionId::new(self.next_region);
        self.regions.insert(id, ScrollRegion::new(id, config));

        #[cfg(debug_assertions)]
        log::debug!("Mounted region {:?} in {} mode", id, config.mode.label());

        id
    }

    /// Destroy a region and every subscription to it
    ///
    /// Returns whether the region existed.
    pub fn unmount(&mut self, id: RegionId) -> bool {
        self.leave(id);
        if self.active_drag == Some(id) {
            self.active_drag = None;
        }

        let existed = self.regions.remove(&id).is_some();

        #[cfg(debug_assertions)]
        {
            if existed {
                log::debug!("Unmounted region {:?}", id);
            }
        }

        existed
    }

    pub fn region(&self, id: RegionId) -> Option<&ScrollRegion> {
        self.regions.get(&id)
    }

    pub fn regions(&self) -> impl Iterator<Item = &ScrollRegion> {
        self.regions.values()
    }

    pub fn render_model(&self, id: RegionId) -> Option<RenderModel> {
        self.regions.get(&id).map(RenderModel::from_region)
    }

    pub fn active_drag(&self) -> Option<RegionId> {
        self.active_drag
    }

    /// Measure the container: position on the host surface and size
    pub fn set_bounds(&mut self, id: RegionId, bounds: Rect) -> Option<ScrollChange> {
        let region = self.regions.get_mut(&id)?;
        region.set_origin(bounds.origin());
        region.set_container_size(bounds.size())
    }

    pub fn set_content_size(&mut self, id: RegionId, content: Size) -> Option<ScrollChange> {
        self.regions.get_mut(&id)?.set_content_size(content)
    }

    pub fn set_mode(&mut self, id: RegionId, mode: ScrollbarMode) -> Option<ScrollChange> {
        self.regions.get_mut(&id)?.set_mode(mode)
    }

    pub fn create_group(&mut self, horizontal: bool) -> GroupId {
        self.next_group += 1;
        let id = GroupId::new(self.next_group);
        self.groups.insert(id, SyncGroup::new(id, horizontal));
        id
    }

    /// Drop a group; its members stay mounted and become unsynced
    pub fn remove_group(&mut self, group: GroupId) -> bool {
        self.membership.retain(|_, g| *g != group);
        self.groups.remove(&group).is_some()
    }

    pub fn group(&self, group: GroupId) -> Option<&SyncGroup> {
        self.groups.get(&group)
    }

    /// Change whether `group` also aligns left offsets
    pub fn set_group_horizontal(&mut self, group: GroupId, horizontal: bool) -> bool {
        let Some(group) = self.groups.get_mut(&group) else {
            return false;
        };
        group.set_horizontal(horizontal);
        true
    }

    pub fn group_of(&self, id: RegionId) -> Option<GroupId> {
        self.membership.get(&id).copied()
    }

    /// Add a mounted region to `group`, leaving any previous group
    pub fn join(
        &mut self,
        group: GroupId,
        id: RegionId,
        on_external_update: Option<ExternalUpdateFn>,
    ) -> bool {
        if !self.regions.contains_key(&id) || !self.groups.contains_key(&group) {
            return false;
        }

        if self.group_of(id) != Some(group) {
            self.leave(id);
        }
        if let Some(sync_group) = self.groups.get_mut(&group) {
            sync_group.register(id, on_external_update);
            self.membership.insert(id, group);
        }
        true
    }

    /// Remove a region from its group; safe to repeat
    pub fn leave(&mut self, id: RegionId) {
        if let Some(group) = self.membership.remove(&id)
            && let Some(sync_group) = self.groups.get_mut(&group)
        {
            sync_group.unregister(id);
        }
    }

    /// Run `op` on one region, then fan its change out to the sync group
    ///
    /// The returned list starts with the region's own change, followed by
    /// the peer changes.
    pub fn apply<F>(&mut self, id: RegionId, op: F) -> Vec<ScrollChange>
    where
        F: FnOnce(&mut ScrollRegion) -> Option<ScrollChange>,
    {
        let Some(change) = self.regions.get_mut(&id).and_then(op) else {
            return Vec::new();
        };
        self.fan_out(change)
    }

    fn fan_out(&mut self, change: ScrollChange) -> Vec<ScrollChange> {
        let mut changes = vec![change];

        if let Some(group) = self.membership.get(&change.region)
            && let Some(sync_group) = self.groups.get_mut(group)
        {
            changes.extend(sync_group.broadcast_from(change.region, &change, &mut self.regions));
        }

        changes
    }

    /// Topmost region containing `point`; later mounts sit on top
    pub fn region_at(&self, point: Point) -> Option<RegionId> {
        self.regions
            .values()
            .rev()
            .find(|region| region.is_ready() && region.bounds().contains(point))
            .map(ScrollRegion::id)
    }

    /// Process one input event to completion
    pub fn handle(&mut self, event: InputEvent) -> Vec<ScrollChange> {
        match event {
            InputEvent::Wheel {
                point,
                delta_x,
                delta_y,
            } => match self.region_at(point) {
                Some(id) => self.apply(id, |r| r.apply_wheel_delta(delta_x, delta_y)),
                None => Vec::new(),
            },
            InputEvent::PointerDown { point } => self.pointer_down(point),
            InputEvent::PointerMove { point } => match self.active_drag {
                Some(id) => self.apply(id, |r| {
                    let local = r.to_local(point);
                    r.update_thumb_drag(local)
                }),
                None => Vec::new(),
            },
            InputEvent::PointerUp { .. } => {
                self.end_drag();
                Vec::new()
            }
            InputEvent::ScrollTo { region, top, left } => {
                self.apply(region, |r| r.apply_absolute(top, left))
            }
        }
    }

    fn pointer_down(&mut self, point: Point) -> Vec<ScrollChange> {
        // A drag whose pointer-up was lost ends here
        self.end_drag();

        let Some(id) = self.region_at(point) else {
            return Vec::new();
        };
        let Some(region) = self.regions.get(&id) else {
            return Vec::new();
        };
        let local = region.to_local(point);
        let Some(hit) = hit_test(&RenderModel::from_region(region), local) else {
            return Vec::new();
        };

        match hit.part {
            ScrollbarPart::Thumb => {
                if let Some(region) = self.regions.get_mut(&id) {
                    region.begin_thumb_drag(hit.axis, local);
                    self.active_drag = Some(id);
                }
                Vec::new()
            }
            ScrollbarPart::Track => self.apply(id, |r| r.handle_track_click(hit.axis, hit.along)),
            ScrollbarPart::ArrowStart => {
                self.apply(id, |r| r.handle_arrow_click(hit.axis, Direction::Backward))
            }
            ScrollbarPart::ArrowEnd => {
                self.apply(id, |r| r.handle_arrow_click(hit.axis, Direction::Forward))
            }
        }
    }

    /// End the active drag, if any; idempotent
    pub fn end_drag(&mut self) {
        if let Some(id) = self.active_drag.take()
            && let Some(region) = self.regions.get_mut(&id)
        {
            region.end_thumb_drag();
        }
    }
}
