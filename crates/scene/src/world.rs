use foundation::handles::Handle;
use geometry::Mesh;

use crate::components::{Label, MeshId, MeshInstance, ToonMaterial, Transform, Visibility};
use crate::entity::EntityId;

/// Named attachment group. A group's contents can be wholesale replaced by
/// clearing it and spawning anew; the route session leans on this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(pub u32);

/// The scene world: entities with per-component columns, a mesh store, and
/// named attachment groups.
///
/// Entity ids are generational: despawning a slot bumps its generation, so a
/// stale id held by, say, an animation task reports dead instead of aliasing
/// whatever reuses the slot.
#[derive(Debug, Default)]
pub struct World {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
    transforms: Vec<Option<Transform>>,
    visibility: Vec<Option<Visibility>>,
    mesh_instances: Vec<Option<MeshInstance>>,
    materials: Vec<Option<ToonMaterial>>,
    labels: Vec<Option<Label>>,
    group_of: Vec<Option<GroupId>>,
    meshes: Vec<Mesh>,
    group_names: Vec<String>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let index = match self.free.pop() {
            Some(index) => {
                self.alive[index as usize] = true;
                index
            }
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                self.alive.push(true);
                self.ensure_capacity(index as usize);
                index
            }
        };
        EntityId(Handle::new(index, self.generations[index as usize]))
    }

    /// Removes the entity and all its components. The slot's generation is
    /// bumped so outstanding ids to it are detectably dead. Despawning a dead
    /// or stale id is a no-op.
    pub fn despawn(&mut self, entity: EntityId) {
        if !self.is_alive(entity) {
            return;
        }
        let idx = entity.index() as usize;
        self.transforms[idx] = None;
        self.visibility[idx] = None;
        self.mesh_instances[idx] = None;
        self.materials[idx] = None;
        self.labels[idx] = None;
        self.group_of[idx] = None;
        self.alive[idx] = false;
        self.generations[idx] = self.generations[idx].wrapping_add(1);
        self.free.push(entity.index());
    }

    pub fn is_alive(&self, entity: EntityId) -> bool {
        let idx = entity.index() as usize;
        idx < self.generations.len()
            && self.alive[idx]
            && self.generations[idx] == entity.generation()
    }

    pub fn entity_count(&self) -> usize {
        self.alive.iter().filter(|a| **a).count()
    }

    // --- component setters; writes to dead ids are dropped ---

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        if self.is_alive(entity) {
            self.transforms[entity.index() as usize] = Some(transform);
        }
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        if !self.is_alive(entity) {
            return None;
        }
        self.transforms[entity.index() as usize]
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        if self.is_alive(entity) {
            self.visibility[entity.index() as usize] = Some(visibility);
        }
    }

    pub fn set_mesh_instance(&mut self, entity: EntityId, instance: MeshInstance) {
        if self.is_alive(entity) {
            self.mesh_instances[entity.index() as usize] = Some(instance);
        }
    }

    pub fn set_material(&mut self, entity: EntityId, material: ToonMaterial) {
        if self.is_alive(entity) {
            self.materials[entity.index() as usize] = Some(material);
        }
    }

    pub fn set_label(&mut self, entity: EntityId, label: Label) {
        if self.is_alive(entity) {
            self.labels[entity.index() as usize] = Some(label);
        }
    }

    // --- mesh store ---

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0 as usize)
    }

    // --- attachment groups ---

    pub fn create_group(&mut self, name: impl Into<String>) -> GroupId {
        let id = GroupId(self.group_names.len() as u32);
        self.group_names.push(name.into());
        id
    }

    pub fn group_name(&self, group: GroupId) -> Option<&str> {
        self.group_names.get(group.0 as usize).map(String::as_str)
    }

    pub fn set_group(&mut self, entity: EntityId, group: GroupId) {
        if self.is_alive(entity) {
            self.group_of[entity.index() as usize] = Some(group);
        }
    }

    pub fn group_members(&self, group: GroupId) -> Vec<EntityId> {
        let mut out = Vec::new();
        for (idx, g) in self.group_of.iter().enumerate() {
            if *g == Some(group) && self.alive[idx] {
                out.push(self.id_at(idx));
            }
        }
        out
    }

    /// Despawns every member of the group; returns how many were removed.
    /// The group itself stays and can be repopulated.
    pub fn clear_group(&mut self, group: GroupId) -> usize {
        let members = self.group_members(group);
        let count = members.len();
        for entity in members {
            self.despawn(entity);
        }
        count
    }

    // --- extraction for the display collaborator ---

    pub fn visible_solids(&self) -> Vec<(EntityId, Transform, MeshInstance, ToonMaterial)> {
        let mut out = Vec::new();
        for idx in 0..self.generations.len() {
            if !self.alive[idx] || !self.is_visible(idx) {
                continue;
            }
            let (Some(transform), Some(instance), Some(material)) = (
                self.transforms[idx],
                self.mesh_instances[idx],
                self.materials[idx],
            ) else {
                continue;
            };
            out.push((self.id_at(idx), transform, instance, material));
        }
        out
    }

    pub fn visible_labels(&self) -> Vec<(EntityId, Transform, Label)> {
        let mut out = Vec::new();
        for idx in 0..self.generations.len() {
            if !self.alive[idx] || !self.is_visible(idx) {
                continue;
            }
            let (Some(transform), Some(label)) = (self.transforms[idx], self.labels[idx].clone())
            else {
                continue;
            };
            out.push((self.id_at(idx), transform, label));
        }
        out
    }

    fn is_visible(&self, idx: usize) -> bool {
        self.visibility[idx].map(|v| v.visible).unwrap_or(true)
    }

    fn id_at(&self, idx: usize) -> EntityId {
        EntityId(Handle::new(idx as u32, self.generations[idx]))
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.mesh_instances.resize(new_len, None);
            self.materials.resize(new_len, None);
            self.labels.resize(new_len, None);
            self.group_of.resize(new_len, None);
        }
    }
}
