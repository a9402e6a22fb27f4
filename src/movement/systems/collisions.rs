//! Movement domain: ground contact sampling.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementTuning, Player, PlayerMotion};

pub(crate) fn detect_ground(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut PlayerMotion), With<Player>>,
) {
    let dt = time.delta_secs();

    // Filter to only hit Ground layer entities (not enemies or the player itself)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::circle(tuning.ground_probe_radius);

    for (transform, mut motion) in &mut query {
        let probe_center =
            transform.translation.truncate() - Vec2::new(0.0, tuning.ground_probe_depth);

        let grounded = !spatial_query
            .shape_intersections(&probe, probe_center, 0.0, &ground_filter)
            .is_empty();

        motion.update_grounded_and_coyote(grounded, dt, &tuning);
    }
}
