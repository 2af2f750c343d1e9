//! Fixed landmark props: hand-modeled assemblies of primitive solids,
//! dispatched by attraction name. No procedural content; the dimensions are
//! part of the map's visual identity.

use catalog::{MapCatalog, rgb};
use foundation::math::Vec3;
use geometry::shapes;
use geometry::Mesh;
use scene::components::{MeshInstance, ToonMaterial, Transform};
use scene::{GroupId, World};

pub struct PropPart {
    pub mesh: Mesh,
    pub color: [f32; 3],
}

impl PropPart {
    fn new(mesh: Mesh, offset: Vec3, color: u32) -> Self {
        Self {
            mesh: mesh.translated(offset),
            color: rgb(color),
        }
    }
}

/// The parts making up the prop for a named attraction, in the prop's local
/// frame. Unknown names have no prop; their marker data still exists in the
/// catalog, so this is not an error.
pub fn prop_parts_for(name: &str) -> Option<Vec<PropPart>> {
    if name.contains("Fuji") {
        Some(mountain())
    } else if name.contains("Tower") {
        Some(lattice_tower())
    } else if name.contains("Torii") {
        Some(shrine_gate())
    } else if name.contains("Castle") {
        Some(tiered_castle())
    } else if name.contains("Nara") {
        Some(deer())
    } else {
        None
    }
}

pub fn build_props(world: &mut World, catalog: &MapCatalog) -> GroupId {
    let group = world.create_group("props");
    for attraction in catalog.attractions() {
        let Some(parts) = prop_parts_for(&attraction.name) else {
            continue;
        };
        let [x, y, z] = attraction.position;
        for part in parts {
            let mesh_id = world.add_mesh(part.mesh);
            let entity = world.spawn();
            world.set_transform(entity, Transform::translate(Vec3::new(x, y, z)));
            world.set_mesh_instance(entity, MeshInstance::new(mesh_id));
            world.set_material(entity, ToonMaterial::new(part.color));
            world.set_group(entity, group);
        }
    }
    group
}

fn mountain() -> Vec<PropPart> {
    vec![
        PropPart::new(
            shapes::cone(22.0, 36.0, 6),
            Vec3::new(0.0, 12.0, 0.0),
            0x3a7f4e,
        ),
        PropPart::new(
            shapes::cone(16.0, 10.0, 6),
            Vec3::new(0.0, 30.0, 0.0),
            0xffffff,
        ),
    ]
}

fn lattice_tower() -> Vec<PropPart> {
    let paint = 0xff3d00;
    vec![
        PropPart::new(
            shapes::cylinder(1.0, 6.0, 16.0, 6),
            Vec3::new(0.0, 8.0, 0.0),
            paint,
        ),
        PropPart::new(
            shapes::cylinder(1.0, 4.0, 20.0, 6),
            Vec3::new(0.0, 26.0, 0.0),
            paint,
        ),
        PropPart::new(
            shapes::cone(3.0, 8.0, 6),
            Vec3::new(0.0, 40.0, 0.0),
            paint,
        ),
    ]
}

fn shrine_gate() -> Vec<PropPart> {
    let vermilion = 0xff3d00;
    vec![
        PropPart::new(
            shapes::cylinder(1.2, 1.2, 10.0, 8),
            Vec3::new(-4.0, 5.0, 0.0),
            vermilion,
        ),
        PropPart::new(
            shapes::cylinder(1.2, 1.2, 10.0, 8),
            Vec3::new(4.0, 5.0, 0.0),
            vermilion,
        ),
        PropPart::new(
            shapes::cuboid(10.0, 1.2, 2.0),
            Vec3::new(0.0, 10.5, 0.0),
            vermilion,
        ),
    ]
}

fn tiered_castle() -> Vec<PropPart> {
    let mut parts = Vec::new();
    for (width, y) in [(18.0, 4.0), (14.0, 12.0), (10.0, 20.0)] {
        let height = 6.0;
        parts.push(PropPart::new(
            shapes::cuboid(width, height, width),
            Vec3::new(0.0, y, 0.0),
            0x6b4f39,
        ));
        parts.push(PropPart::new(
            shapes::cone(width * 0.75, height * 0.8, 4),
            Vec3::new(0.0, y + height * 0.9, 0.0),
            0x2ba84a,
        ));
    }
    parts
}

fn deer() -> Vec<PropPart> {
    let hide = 0x9c6b3d;
    let mut parts = vec![
        PropPart::new(shapes::cuboid(8.0, 4.0, 3.0), Vec3::new(0.0, 6.0, 0.0), hide),
        PropPart::new(shapes::cuboid(3.0, 3.0, 3.0), Vec3::new(5.0, 8.0, 0.0), hide),
    ];
    for x in [-3.0, 3.0] {
        for z in [-1.0, 1.0] {
            parts.push(PropPart::new(
                shapes::cuboid(1.0, 6.0, 1.0),
                Vec3::new(x, 3.0, z),
                hide,
            ));
        }
    }
    parts.push(PropPart::new(
        shapes::cuboid(0.6, 2.4, 0.6),
        Vec3::new(6.0, 10.0, 0.0),
        0xead39c,
    ));
    parts
}
