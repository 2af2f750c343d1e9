use catalog::MapCatalog;
use foundation::math::Vec3;
use runtime::{TaskHandle, TaskScheduler};
use scene::{GroupId, World};

use crate::animator::RouteAnimator;
use crate::planner::{format_distance, plan_route, route_distance_km};
use crate::renderer::render_route;

/// Owns the one live route: its attachment group, the handle of its animator
/// task, and the published distance string.
///
/// All route mutation goes through the session, which clears before it
/// builds, so at most one tube and one marker exist no matter how quickly
/// requests are repeated. Several sessions can coexist in one world; each
/// owns its own group.
pub struct RouteSession {
    group: GroupId,
    animator: Option<TaskHandle>,
    distance_text: Option<String>,
}

impl RouteSession {
    pub fn new(world: &mut World) -> Self {
        Self {
            group: world.create_group("route"),
            animator: None,
            distance_text: None,
        }
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    /// The distance estimate published by the last successful request.
    pub fn distance_text(&self) -> Option<&str> {
        self.distance_text.as_deref()
    }

    /// Plans, renders and animates a route between two named locations.
    ///
    /// An unknown name fails closed: nothing is drawn, nothing is cleared,
    /// and the previous route (if any) keeps running. Lookups come from a
    /// bounded selection list, so this is a data problem to surface quietly,
    /// not an exception to throw into the frame path.
    pub fn request_route(
        &mut self,
        world: &mut World,
        tasks: &mut TaskScheduler<World>,
        catalog: &MapCatalog,
        from: &str,
        to: &str,
    ) -> bool {
        let (Some(from), Some(to)) = (catalog.location(from), catalog.location(to)) else {
            return false;
        };
        let from = position(from.position);
        let to = position(to.position);

        self.clear(world, tasks);

        let curve = plan_route(from, to);
        let rendered = render_route(world, self.group, &curve);
        self.animator = Some(tasks.add_task(
            "route.animator",
            Box::new(RouteAnimator::new(rendered.marker, curve)),
        ));
        self.distance_text = Some(format_distance(route_distance_km(from, to)));
        true
    }

    /// Cancels the animator and empties the attachment group.
    ///
    /// The cancel is explicit; the animator's own liveness check only exists
    /// for ticks already queued when the group was cleared externally.
    pub fn clear(&mut self, world: &mut World, tasks: &mut TaskScheduler<World>) {
        if let Some(handle) = self.animator.take() {
            tasks.cancel(handle);
        }
        world.clear_group(self.group);
        self.distance_text = None;
    }
}

fn position(p: [f64; 3]) -> Vec3 {
    Vec3::new(p[0], p[1], p[2])
}

#[cfg(test)]
mod tests {
    use super::RouteSession;
    use catalog::japan::japan;
    use runtime::{EventBus, Frame, TaskScheduler};
    use scene::World;

    fn setup() -> (World, TaskScheduler<World>, RouteSession) {
        let mut world = World::new();
        let session = RouteSession::new(&mut world);
        (world, TaskScheduler::new(), session)
    }

    #[test]
    fn request_publishes_route_and_distance() {
        let (mut world, mut tasks, mut session) = setup();
        let catalog = japan();
        assert!(session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto"));
        assert_eq!(world.group_members(session.group()).len(), 2);
        assert_eq!(tasks.task_count(), 1);
        assert_eq!(session.distance_text(), Some("~962 km"));
    }

    #[test]
    fn unknown_location_is_a_safe_no_op() {
        let (mut world, mut tasks, mut session) = setup();
        let catalog = japan();
        assert!(!session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Atlantis"));
        assert!(world.group_members(session.group()).is_empty());
        assert_eq!(tasks.task_count(), 0);
        assert_eq!(session.distance_text(), None);

        // A failed lookup must not tear down a live route either.
        assert!(session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto"));
        assert!(!session.request_route(&mut world, &mut tasks, &catalog, "Atlantis", "Kyoto"));
        assert_eq!(world.group_members(session.group()).len(), 2);
        assert_eq!(session.distance_text(), Some("~962 km"));
    }

    #[test]
    fn repeated_requests_leave_exactly_one_route() {
        let (mut world, mut tasks, mut session) = setup();
        let catalog = japan();
        session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto");
        session.request_route(&mut world, &mut tasks, &catalog, "Osaka", "Sapporo");
        session.request_route(&mut world, &mut tasks, &catalog, "Nara", "Fukuoka");

        assert_eq!(world.group_members(session.group()).len(), 2);
        assert_eq!(tasks.task_count(), 1);

        // The surviving animator drives the surviving marker.
        let mut bus = EventBus::new();
        let before: Vec<_> = world
            .group_members(session.group())
            .iter()
            .map(|e| world.transform(*e).unwrap().position)
            .collect();
        tasks.run_frame(Frame::first(1.0 / 60.0), &mut world, &mut bus);
        let after: Vec<_> = world
            .group_members(session.group())
            .iter()
            .map(|e| world.transform(*e).unwrap().position)
            .collect();
        assert_ne!(before, after);
    }

    #[test]
    fn clear_halts_animation_immediately() {
        let (mut world, mut tasks, mut session) = setup();
        let catalog = japan();
        session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto");
        session.clear(&mut world, &mut tasks);

        assert!(world.group_members(session.group()).is_empty());
        assert_eq!(tasks.task_count(), 0);
        assert_eq!(session.distance_text(), None);

        // Clearing twice is harmless.
        session.clear(&mut world, &mut tasks);
        assert_eq!(tasks.task_count(), 0);
    }

    #[test]
    fn external_group_clear_stops_the_animator_within_one_tick() {
        let (mut world, mut tasks, mut session) = setup();
        let catalog = japan();
        session.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto");

        // Cleared behind the session's back: the task survives until its next
        // tick, which detects the dead marker and stands down.
        world.clear_group(session.group());
        assert_eq!(tasks.task_count(), 1);
        let mut bus = EventBus::new();
        tasks.run_frame(Frame::first(1.0 / 60.0), &mut world, &mut bus);
        assert_eq!(tasks.task_count(), 0);

        // The session's own clear afterwards is still safe.
        session.clear(&mut world, &mut tasks);
        assert_eq!(tasks.task_count(), 0);
    }

    #[test]
    fn sessions_are_independent() {
        let mut world = World::new();
        let mut tasks = TaskScheduler::new();
        let mut first = RouteSession::new(&mut world);
        let mut second = RouteSession::new(&mut world);
        let catalog = japan();

        first.request_route(&mut world, &mut tasks, &catalog, "Tokyo", "Kyoto");
        second.request_route(&mut world, &mut tasks, &catalog, "Osaka", "Nara");
        assert_eq!(world.group_members(first.group()).len(), 2);
        assert_eq!(world.group_members(second.group()).len(), 2);

        first.clear(&mut world, &mut tasks);
        assert!(world.group_members(first.group()).is_empty());
        assert_eq!(world.group_members(second.group()).len(), 2);
        assert_eq!(tasks.task_count(), 1);
    }
}
