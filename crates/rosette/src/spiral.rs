//! Spiral path generation - a turtle walk with a growing step.
//!
//! Start at the origin heading along +x. For each segment: walk `step`
//! forward, turn by `180 - turn_angle` degrees, grow the step. After every
//! `segments_per_repeat` segments the step resets to its initial value while
//! the heading keeps accumulating, which is what turns a single spiral arm
//! into a rosette.

use crate::geometry::Point;
use crate::params::SpiralParams;

/// Cap on how many vertices we reserve up front. The walk itself is not
/// capped; this only stops a huge count from allocating before it starts.
const MAX_PREALLOCATED_VERTICES: u64 = 1 << 20;

/// Per-segment heading change for a user turn angle.
///
/// The user angle is inverted: 144 gives 36, so a five-point star.
#[inline]
pub fn effective_turn(turn_angle_degrees: f64) -> f64 {
    180.0 - turn_angle_degrees
}

/// Walk the spiral and return every vertex, starting with `origin`.
///
/// Always returns at least one point. With zero (or negative) segments or
/// repeats the result is just `[origin]`. NaN parameters produce NaN
/// coordinates; nothing here panics on them.
pub fn generate_spiral(params: &SpiralParams, origin: Point) -> Vec<Point> {
    let repeats = params.repeat_count();
    let segments = params.segment_count();
    let turn = effective_turn(params.turn_angle_degrees);

    let reserve = params.total_segments().min(MAX_PREALLOCATED_VERTICES) as usize;
    let mut points = Vec::with_capacity(reserve + 1);
    points.push(origin);

    let mut x = origin.x;
    let mut y = origin.y;
    let mut heading = 0.0_f64;

    for _ in 0..repeats {
        let mut step = params.initial_step;

        for _ in 0..segments {
            let theta = heading.to_radians();
            x += step * theta.cos();
            y += step * theta.sin();
            points.push(Point::new(x, y));

            heading += turn;
            step += params.step_increment;
        }
    }

    points
}
