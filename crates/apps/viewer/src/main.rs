//! Headless demo loop: builds the stylized Japan map, requests one route and
//! steps the frame scheduler. A display collaborator would replace the
//! logging with actual rendering of the extracted snapshot.

use std::env;

use catalog::japan::japan;
use routes::RouteSession;
use runtime::{EventBus, Frame, TaskScheduler};
use scene::World;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let from = env::var("ROUTE_FROM").unwrap_or_else(|_| "Tokyo".to_string());
    let to = env::var("ROUTE_TO").unwrap_or_else(|_| "Kyoto".to_string());
    let frames: u64 = env::var("FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(600);

    let catalog = japan();
    let mut world = World::new();
    map::islands::build_islands(&mut world, &catalog);
    map::markers::build_city_markers(&mut world, &catalog);
    map::props::build_props(&mut world, &catalog);

    let snapshot = map::extract(&world);
    info!(
        solids = snapshot.solids.len(),
        labels = snapshot.labels.len(),
        "map built"
    );

    let mut tasks: TaskScheduler<World> = TaskScheduler::new();
    let mut session = RouteSession::new(&mut world);
    if session.request_route(&mut world, &mut tasks, &catalog, &from, &to) {
        if let Some(distance) = session.distance_text() {
            info!(%from, %to, distance, "route ready");
        }
    } else {
        warn!(%from, %to, "unknown location, no route drawn");
    }

    let mut bus = EventBus::new();
    let mut frame = Frame::first(1.0 / 60.0);
    for _ in 0..frames {
        tasks.run_frame(frame, &mut world, &mut bus);
        if frame.index % 120 == 0 {
            for entity in world.group_members(session.group()) {
                if let Some(t) = world.transform(entity) {
                    info!(
                        frame = frame.index,
                        x = t.position.x,
                        y = t.position.y,
                        z = t.position.z,
                        "route content"
                    );
                }
            }
        }
        frame = frame.next();
    }

    for event in bus.drain() {
        info!(frame = event.frame_index, kind = event.kind, "{}", event.message);
    }

    session.clear(&mut world, &mut tasks);
    tasks.run_frame(frame, &mut world, &mut bus);
    info!(remaining_tasks = tasks.task_count(), "route cleared");
}
