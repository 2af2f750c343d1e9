use geometry::QuadraticBezier;
use runtime::{EventBus, Frame, FrameTask, TaskControl};
use scene::World;
use scene::components::Transform;
use scene::entity::EntityId;

/// Fixed parameter advance per tick. A full traversal takes 500 ticks, just
/// over eight seconds at 60 Hz, and the marker loops until the route dies.
pub const STEP_PER_TICK: f64 = 0.002;

/// Drives the traveling marker along its route arc.
///
/// The task carries all of its own state: the curve, the current parameter
/// and the id of the marker it moves. Its owning [`RouteSession`] cancels it
/// explicitly on clear; the liveness check is the backstop for a tick already
/// queued when the route content was torn out from under it (cleared through
/// the world rather than the session). Such a stale tick writes nothing and
/// stops the task.
///
/// [`RouteSession`]: crate::session::RouteSession
pub struct RouteAnimator {
    marker: EntityId,
    curve: QuadraticBezier,
    t: f64,
}

impl RouteAnimator {
    pub fn new(marker: EntityId, curve: QuadraticBezier) -> Self {
        Self {
            marker,
            curve,
            t: 0.0,
        }
    }
}

impl FrameTask<World> for RouteAnimator {
    fn tick(&mut self, _frame: Frame, world: &mut World, _bus: &mut EventBus) -> TaskControl {
        if !world.is_alive(self.marker) {
            return TaskControl::Stop;
        }
        self.t += STEP_PER_TICK;
        if self.t > 1.0 {
            self.t = 0.0;
        }
        world.set_transform(self.marker, Transform::translate(self.curve.point_at(self.t)));
        TaskControl::Continue
    }
}
