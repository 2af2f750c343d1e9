use scene::World;
use scene::components::{Label, MeshInstance, ToonMaterial, Transform};
use scene::entity::EntityId;

/// Everything a display collaborator needs for one frame: visible solids with
/// their styling, and the labels to project.
#[derive(Debug, Default, Clone)]
pub struct MapSnapshot {
    pub solids: Vec<(EntityId, Transform, MeshInstance, ToonMaterial)>,
    pub labels: Vec<(EntityId, Transform, Label)>,
}

pub fn extract(world: &World) -> MapSnapshot {
    MapSnapshot {
        solids: world.visible_solids(),
        labels: world.visible_labels(),
    }
}
