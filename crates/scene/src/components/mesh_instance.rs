/// Index into the world's mesh store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Attaches stored geometry to an entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MeshInstance {
    pub mesh: MeshId,
}

impl MeshInstance {
    pub fn new(mesh: MeshId) -> Self {
        Self { mesh }
    }
}
