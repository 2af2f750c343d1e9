use catalog::{MapCatalog, rgb};
use foundation::math::Vec3;
use geometry::shapes;
use scene::components::{Label, MeshInstance, ToonMaterial, Transform};
use scene::{GroupId, World};

pub const PIN_RADIUS: f64 = 2.6;
pub const PIN_LIFT: f64 = 3.0;
pub const LABEL_LIFT: f64 = 10.0;
pub const PIN_COLOR: u32 = 0x1f8b4c;

/// One pin sphere per city, sharing a single stored mesh, each carrying its
/// name as a label for the display collaborator.
pub fn build_city_markers(world: &mut World, catalog: &MapCatalog) -> GroupId {
    let group = world.create_group("markers");
    let pin_mesh = world.add_mesh(shapes::uv_sphere(PIN_RADIUS, 16, 16));

    for city in catalog.cities() {
        let [x, y, z] = city.position;
        let entity = world.spawn();
        world.set_transform(entity, Transform::translate(Vec3::new(x, y + PIN_LIFT, z)));
        world.set_mesh_instance(entity, MeshInstance::new(pin_mesh));
        world.set_material(entity, ToonMaterial::new(rgb(PIN_COLOR)));
        world.set_label(
            entity,
            Label::new(city.name.clone(), Vec3::new(0.0, LABEL_LIFT, 0.0)),
        );
        world.set_group(entity, group);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::{PIN_LIFT, build_city_markers};
    use catalog::japan::japan;
    use scene::World;

    #[test]
    fn one_pin_per_city() {
        let mut world = World::new();
        let catalog = japan();
        let group = build_city_markers(&mut world, &catalog);
        assert_eq!(world.group_members(group).len(), catalog.cities().count());
    }

    #[test]
    fn pins_are_lifted_and_share_one_mesh() {
        let mut world = World::new();
        let catalog = japan();
        build_city_markers(&mut world, &catalog);

        let solids = world.visible_solids();
        let tokyo = catalog.location("Tokyo").unwrap();
        let pin = solids
            .iter()
            .find(|(_, t, ..)| t.position.x == tokyo.position[0])
            .unwrap();
        assert_eq!(pin.1.position.y, tokyo.position[1] + PIN_LIFT);

        let first = solids[0].2.mesh;
        assert!(solids.iter().all(|(_, _, m, _)| m.mesh == first));
    }

    #[test]
    fn labels_carry_the_city_names() {
        let mut world = World::new();
        build_city_markers(&mut world, &japan());
        let labels = world.visible_labels();
        assert!(labels.iter().any(|(_, _, l)| l.text == "Sapporo"));
        assert!(labels.iter().any(|(_, _, l)| l.text == "Fukuoka"));
    }
}
