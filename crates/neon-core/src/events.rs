//! Events emitted by the simulation for host feedback (scoring, effects).

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// One resolved (target, laser) overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub target_kind: TargetKind,
    pub target_id: EntityId,
    pub laser_id: EntityId,
    pub laser_class: LaserClass,
    pub power: u32,
}
