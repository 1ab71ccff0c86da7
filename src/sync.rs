//! Cross-panel scroll synchronization
//!
//! A `SyncGroup` keeps its members proportionally aligned: when one member
//! scrolls, every other member is moved to the same offset ratio through its
//! own `apply_absolute` entry point.

mod sync_group;

pub use sync_group::{ExternalUpdateFn, GroupId, RegionStore, SyncGroup};
