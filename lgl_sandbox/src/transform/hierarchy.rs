/// TransformHierarchy — a tree of transforms with cached world matrices.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. World matrices
/// are computed on demand and cached per node; editing a node invalidates
/// its cache and the caches of every descendant.

use std::cell::Cell;
use glam::{Mat4, Quat, Vec3};
use slotmap::{new_key_type, SlotMap};
use crate::config::constants::{WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
use crate::error::{Error, Result};
use super::transform::{look_rotation, Transform};

new_key_type! {
    /// Stable handle to a node in a [`TransformHierarchy`].
    pub struct TransformKey;
}

#[derive(Debug)]
struct Node {
    local: Transform,
    parent: Option<TransformKey>,
    children: Vec<TransformKey>,
    world: Cell<Mat4>,
    world_dirty: Cell<bool>,
}

impl Node {
    fn new(local: Transform) -> Self {
        Self {
            local,
            parent: None,
            children: Vec::new(),
            world: Cell::new(Mat4::IDENTITY),
            world_dirty: Cell::new(true),
        }
    }
}

/// Owner of all transforms in a scene graph.
#[derive(Debug, Default)]
pub struct TransformHierarchy {
    nodes: SlotMap<TransformKey, Node>,
}

impl TransformHierarchy {
    pub fn new() -> Self {
        Self { nodes: SlotMap::with_key() }
    }

    /// Add a root transform.
    pub fn insert(&mut self, local: Transform) -> TransformKey {
        self.nodes.insert(Node::new(local))
    }

    /// Add a transform under `parent`. `local` is relative to the parent.
    pub fn insert_child(&mut self, parent: TransformKey, local: Transform) -> Result<TransformKey> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::InvalidHierarchy("parent key is not in this hierarchy".to_string()));
        }
        let key = self.nodes.insert(Node::new(local));
        self.nodes[key].parent = Some(parent);
        self.nodes[parent].children.push(key);
        Ok(key)
    }

    /// Remove a node and return its local transform.
    ///
    /// Children move up to the removed node's parent and keep their world pose.
    pub fn remove(&mut self, key: TransformKey) -> Option<Transform> {
        let (parent, children) = {
            let node = self.nodes.get(key)?;
            (node.parent, node.children.clone())
        };
        for child in children {
            // Cannot fail: `parent` is an ancestor of `child`, never a descendant.
            let _ = self.set_parent(child, parent);
        }
        if let Some(parent) = parent {
            self.nodes[parent].children.retain(|&c| c != key);
        }
        self.nodes.remove(key).map(|node| node.local)
    }

    pub fn contains(&self, key: TransformKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== LINKS =====

    pub fn parent(&self, key: TransformKey) -> Option<TransformKey> {
        self.nodes.get(key)?.parent
    }

    pub fn children(&self, key: TransformKey) -> &[TransformKey] {
        self.nodes.get(key).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Re-parent `child`, keeping its world position and rotation.
    ///
    /// `None` detaches the node and makes it a root.
    ///
    /// # Errors
    ///
    /// `InvalidHierarchy` if a key is unknown, if `child == parent`, or if
    /// `parent` is a descendant of `child`.
    pub fn set_parent(&mut self, child: TransformKey, parent: Option<TransformKey>) -> Result<()> {
        if !self.nodes.contains_key(child) {
            return Err(Error::InvalidHierarchy("child key is not in this hierarchy".to_string()));
        }
        if self.nodes[child].parent == parent {
            return Ok(());
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(Error::InvalidHierarchy("parent key is not in this hierarchy".to_string()));
            }
            if parent == child {
                return Err(Error::InvalidHierarchy("a transform cannot parent itself".to_string()));
            }
            if self.is_ancestor(child, parent) {
                return Err(Error::InvalidHierarchy("re-parenting would create a cycle".to_string()));
            }
        }

        let world_position = self.world_position(child).unwrap_or(Vec3::ZERO);
        let world_rotation = self.world_rotation(child).unwrap_or(Quat::IDENTITY);

        if let Some(old) = self.nodes[child].parent {
            self.nodes[old].children.retain(|&c| c != child);
        }
        self.nodes[child].parent = parent;
        if let Some(new) = parent {
            self.nodes[new].children.push(child);
        }
        self.mark_dirty(child);

        self.set_world_position(child, world_position);
        self.set_world_rotation(child, world_rotation);
        Ok(())
    }

    /// True if `ancestor` appears on the parent chain of `key`.
    pub fn is_ancestor(&self, ancestor: TransformKey, key: TransformKey) -> bool {
        let mut current = self.parent(key);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    // ===== LOCAL SPACE =====

    pub fn local(&self, key: TransformKey) -> Option<&Transform> {
        self.nodes.get(key).map(|n| &n.local)
    }

    /// Replace the local transform. Returns false if the key is invalid.
    pub fn set_local(&mut self, key: TransformKey, local: Transform) -> bool {
        self.edit_local(key, |t| *t = local)
    }

    pub fn set_local_position(&mut self, key: TransformKey, position: Vec3) -> bool {
        self.edit_local(key, |t| t.position = position)
    }

    pub fn set_local_rotation(&mut self, key: TransformKey, rotation: Quat) -> bool {
        self.edit_local(key, |t| t.rotation = rotation.normalize())
    }

    pub fn set_local_scale(&mut self, key: TransformKey, scale: Vec3) -> bool {
        self.edit_local(key, |t| t.scale = scale)
    }

    fn edit_local(&mut self, key: TransformKey, edit: impl FnOnce(&mut Transform)) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                edit(&mut node.local);
                self.mark_dirty(key);
                true
            }
            None => false,
        }
    }

    // ===== WORLD SPACE =====

    /// World matrix (parent world * local), cached until something upstream changes.
    pub fn world_matrix(&self, key: TransformKey) -> Option<Mat4> {
        let node = self.nodes.get(key)?;
        if node.world_dirty.get() {
            let local = node.local.matrix();
            let world = match node.parent {
                Some(parent) => self.world_matrix(parent).unwrap_or(Mat4::IDENTITY) * local,
                None => local,
            };
            node.world.set(world);
            node.world_dirty.set(false);
        }
        Some(node.world.get())
    }

    pub fn world_position(&self, key: TransformKey) -> Option<Vec3> {
        let node = self.nodes.get(key)?;
        match node.parent {
            None => Some(node.local.position),
            Some(_) => self.world_matrix(key).map(|m| m.col(3).truncate()),
        }
    }

    pub fn world_rotation(&self, key: TransformKey) -> Option<Quat> {
        let node = self.nodes.get(key)?;
        match node.parent {
            None => Some(node.local.rotation),
            Some(parent) => {
                let parent_rotation = self.world_rotation(parent).unwrap_or(Quat::IDENTITY);
                Some((parent_rotation * node.local.rotation).normalize())
            }
        }
    }

    /// Approximate world scale (length of each world matrix axis).
    pub fn world_scale(&self, key: TransformKey) -> Option<Vec3> {
        let node = self.nodes.get(key)?;
        match node.parent {
            None => Some(node.local.scale),
            Some(_) => self.world_matrix(key).map(|m| {
                Vec3::new(
                    m.col(0).truncate().length(),
                    m.col(1).truncate().length(),
                    m.col(2).truncate().length(),
                )
            }),
        }
    }

    /// Move a node so its world position equals `position`.
    pub fn set_world_position(&mut self, key: TransformKey, position: Vec3) -> bool {
        let Some(node) = self.nodes.get(key) else { return false };
        let local = match node.parent {
            Some(parent) => {
                let parent_world = self.world_matrix(parent).unwrap_or(Mat4::IDENTITY);
                parent_world.inverse().transform_point3(position)
            }
            None => position,
        };
        self.set_local_position(key, local)
    }

    pub fn set_world_rotation(&mut self, key: TransformKey, rotation: Quat) -> bool {
        let Some(node) = self.nodes.get(key) else { return false };
        let local = match node.parent {
            Some(parent) => {
                let parent_rotation = self.world_rotation(parent).unwrap_or(Quat::IDENTITY);
                parent_rotation.inverse() * rotation
            }
            None => rotation,
        };
        self.set_local_rotation(key, local)
    }

    pub fn forward(&self, key: TransformKey) -> Option<Vec3> {
        self.world_rotation(key).map(|r| r * WORLD_FORWARD)
    }

    pub fn right(&self, key: TransformKey) -> Option<Vec3> {
        self.world_rotation(key).map(|r| r * WORLD_RIGHT)
    }

    pub fn up(&self, key: TransformKey) -> Option<Vec3> {
        self.world_rotation(key).map(|r| r * WORLD_UP)
    }

    /// Rotate a node so its world forward points at `target`.
    pub fn look_at(&mut self, key: TransformKey, target: Vec3, up: Vec3) -> bool {
        let Some(position) = self.world_position(key) else { return false };
        match look_rotation(target - position, up) {
            Some(rotation) => self.set_world_rotation(key, rotation),
            None => true,
        }
    }

    /// Invalidate the cached world matrix of `key` and all its descendants.
    fn mark_dirty(&self, key: TransformKey) {
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(current) {
                node.world_dirty.set(true);
                stack.extend(node.children.iter().copied());
            }
        }
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
