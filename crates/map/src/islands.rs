use catalog::{IslandOutline, MapCatalog};
use foundation::math::{Vec2, Vec3};
use geometry::{ExtrudeOptions, extrude_outline, rounded_outline};
use scene::components::{MeshInstance, ToonMaterial, Transform};
use scene::{GroupId, World};

/// Fixed bevel profile shared by every island; the chamfer only has to read
/// as a soft shoreline, so it is not per-island data.
pub const BEVEL_THICKNESS: f64 = 3.0;
pub const BEVEL_SIZE: f64 = 2.0;
pub const CURVE_SEGMENTS: usize = 12;

/// Builds one landmass and attaches it under a group named after the island.
///
/// Write-once: landmasses are never updated or removed after setup. A
/// degenerate boundary (under 3 points) leaves the group empty rather than
/// failing the map build.
pub fn build_island(world: &mut World, island: &IslandOutline) -> GroupId {
    let group = world.create_group(island.name.clone());

    let points: Vec<Vec2> = island
        .points
        .iter()
        .map(|p| Vec2::new(p[0], p[1]))
        .collect();
    let outline = rounded_outline(&points, island.corner_radius);
    let mesh = extrude_outline(
        &outline,
        &ExtrudeOptions {
            depth: island.depth,
            bevel_thickness: BEVEL_THICKNESS,
            bevel_size: BEVEL_SIZE,
            curve_segments: CURVE_SEGMENTS,
        },
    );
    if mesh.is_empty() {
        return group;
    }

    let mesh_id = world.add_mesh(mesh);
    let entity = world.spawn();
    world.set_transform(
        entity,
        Transform::translate(Vec3::new(0.0, island.lift, 0.0)),
    );
    world.set_mesh_instance(entity, MeshInstance::new(mesh_id));
    world.set_material(entity, ToonMaterial::new(island.color));
    world.set_group(entity, group);
    group
}

pub fn build_islands(world: &mut World, catalog: &MapCatalog) -> Vec<GroupId> {
    catalog
        .islands
        .iter()
        .map(|island| build_island(world, island))
        .collect()
}
