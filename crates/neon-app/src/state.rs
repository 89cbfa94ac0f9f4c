//! Session bookkeeping accumulated from engine snapshots.

use std::collections::HashSet;

use serde::Serialize;

use neon_core::enums::{LaserClass, TargetKind};
use neon_core::state::FrameSnapshot;
use neon_core::types::EntityId;

/// Totals reported at the end of a headless session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub ticks_run: u64,
    pub final_tick: u64,
    pub rocks_seen: usize,
    pub rocks_on_screen: usize,
    pub peak_rocks_on_screen: usize,
    pub ship_lasers_in_flight: usize,
    pub ultimates_fired: u32,
    pub rock_hits: u64,
    pub enemy_hits: u64,
    pub ultimate_hits: u64,
    pub damage_dealt: u64,
    pub enemies_destroyed: u32,
    pub enemies_remaining: usize,
}

/// Running statistics for a session, fed one snapshot per tick.
#[derive(Debug, Default)]
pub struct SessionStats {
    summary: SessionSummary,
    rocks_seen: HashSet<EntityId>,
}

impl SessionStats {
    pub fn new(seed: u64) -> Self {
        Self {
            summary: SessionSummary {
                seed,
                ..Default::default()
            },
            rocks_seen: HashSet::new(),
        }
    }

    pub fn record(&mut self, snapshot: &FrameSnapshot) {
        let s = &mut self.summary;
        s.ticks_run += 1;
        s.final_tick = snapshot.time.tick;
        s.rocks_on_screen = snapshot.space_objects.len();
        s.peak_rocks_on_screen = s.peak_rocks_on_screen.max(snapshot.space_objects.len());
        s.ship_lasers_in_flight = snapshot.ship_lasers.len();

        self.rocks_seen
            .extend(snapshot.space_objects.iter().map(|rock| rock.id));

        for impact in &snapshot.impacts {
            match impact.target_kind {
                TargetKind::SpaceObject => s.rock_hits += 1,
                TargetKind::Enemy => s.enemy_hits += 1,
            }
            if impact.laser_class == LaserClass::Ultimate {
                s.ultimate_hits += 1;
            }
            s.damage_dealt += u64::from(impact.power);
        }
    }

    pub fn record_ultimate(&mut self) {
        self.summary.ultimates_fired += 1;
    }

    pub fn finish(mut self, enemies_destroyed: u32, enemies_remaining: usize) -> SessionSummary {
        self.summary.rocks_seen = self.rocks_seen.len();
        self.summary.enemies_destroyed = enemies_destroyed;
        self.summary.enemies_remaining = enemies_remaining;
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_core::enums::Drawable;
    use neon_core::events::ImpactEvent;
    use neon_core::state::SpaceObjectView;

    fn rock(id: u64) -> SpaceObjectView {
        SpaceObjectView {
            id: EntityId(id),
            drawable: Drawable::SpaceRock,
            x_offset: 50.0,
            y_offset: 0.0,
            size: 30.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_stats_accumulate() {
        let mut stats = SessionStats::new(42);

        let mut snap = FrameSnapshot::default();
        snap.time.tick = 1;
        snap.space_objects = vec![rock(1), rock(2)];
        snap.impacts = vec![
            ImpactEvent {
                target_kind: TargetKind::SpaceObject,
                target_id: EntityId(1),
                laser_id: EntityId(9),
                laser_class: LaserClass::Ship,
                power: 10,
            },
            ImpactEvent {
                target_kind: TargetKind::Enemy,
                target_id: EntityId(500),
                laser_id: EntityId(10),
                laser_class: LaserClass::Ultimate,
                power: 50,
            },
        ];
        stats.record(&snap);

        snap.time.tick = 2;
        snap.space_objects = vec![rock(2)];
        snap.impacts.clear();
        stats.record(&snap);
        stats.record_ultimate();

        let summary = stats.finish(1, 3);
        assert_eq!(summary.seed, 42);
        assert_eq!(summary.ticks_run, 2);
        assert_eq!(summary.final_tick, 2);
        assert_eq!(summary.rocks_seen, 2);
        assert_eq!(summary.rocks_on_screen, 1);
        assert_eq!(summary.peak_rocks_on_screen, 2);
        assert_eq!(summary.rock_hits, 1);
        assert_eq!(summary.enemy_hits, 1);
        assert_eq!(summary.ultimate_hits, 1);
        assert_eq!(summary.damage_dealt, 60);
        assert_eq!(summary.ultimates_fired, 1);
        assert_eq!(summary.enemies_destroyed, 1);
        assert_eq!(summary.enemies_remaining, 3);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = SessionStats::new(1).finish(0, 0);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["seed"], 1);
        assert_eq!(json["ticks_run"], 0);
    }
}
