use catalog::rgb;
use geometry::{QuadraticBezier, shapes, sweep_tube};
use scene::components::{MeshInstance, ToonMaterial, Transform};
use scene::{GroupId, World};

pub const TUBE_SAMPLES: usize = 64;
pub const TUBE_RADIUS: f64 = 1.3;
pub const TUBE_RADIAL_SEGMENTS: usize = 12;
pub const TUBE_COLOR: u32 = 0xff6b57;
pub const MARKER_RADIUS: f64 = 2.0;
pub const MARKER_COLOR: u32 = 0xffffff;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderedRoute {
    pub tube: scene::entity::EntityId,
    pub marker: scene::entity::EntityId,
}

/// Builds the route tube and its traveling marker inside `group`.
///
/// The caller owns the group lifecycle; this only ever adds. The marker
/// starts at `t = 0` on the curve and is moved by the animator from there.
pub fn render_route(world: &mut World, group: GroupId, curve: &QuadraticBezier) -> RenderedRoute {
    let tube_mesh = world.add_mesh(sweep_tube(
        curve,
        TUBE_SAMPLES,
        TUBE_RADIUS,
        TUBE_RADIAL_SEGMENTS,
    ));
    let tube = world.spawn();
    world.set_transform(tube, Transform::identity());
    world.set_mesh_instance(tube, MeshInstance::new(tube_mesh));
    world.set_material(tube, ToonMaterial::new(rgb(TUBE_COLOR)));
    world.set_group(tube, group);

    let marker_mesh = world.add_mesh(shapes::uv_sphere(MARKER_RADIUS, 16, 16));
    let marker = world.spawn();
    world.set_transform(marker, Transform::translate(curve.point_at(0.0)));
    world.set_mesh_instance(marker, MeshInstance::new(marker_mesh));
    world.set_material(marker, ToonMaterial::new(rgb(MARKER_COLOR)));
    world.set_group(marker, group);

    RenderedRoute { tube, marker }
}
