//! Scene description: a small node store for the demo scene.
//!
//! Nodes are stored in a BTreeMap for deterministic iteration order. The
//! scene is a passive description; simulation state lives in `rebound-sim`
//! and hosts copy the simulated height into the sphere's transform each
//! frame.
//!
//! # Invariants
//! - Renderers read the scene, they never mutate it.
//! - Iteration order is deterministic (BTreeMap).

pub mod demo;

use glam::Vec3;
use rebound_common::{Color, NodeId, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parametric mesh shapes the renderer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeshShape {
    /// UV sphere described by its diameter and segment count.
    Sphere { diameter: f32, segments: u32 },
    /// Flat rectangle in the XZ plane, centered on the node's position.
    Ground { width: f32, depth: f32 },
}

/// Surface material for a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: Color,
}

/// A light that blends a sky contribution toward its direction with a
/// ground contribution away from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HemisphericLight {
    pub direction: Vec3,
    pub intensity: f32,
}

/// Camera placement: where it sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraNode {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_degrees: f32,
}

/// What a node is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Mesh { shape: MeshShape, material: Material },
    Light(HemisphericLight),
    Camera(CameraNode),
}

/// A named node with a transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
}

/// Errors from scene lookups.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("node {0:?} not found")]
    NodeNotFound(NodeId),
}

/// The scene graph: a flat, deterministic node store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    nodes: BTreeMap<NodeId, Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its id.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Replace a node's transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(&id).ok_or(SceneError::NodeNotFound(id))?;
        node.transform = transform;
        Ok(())
    }

    /// Move a node vertically, leaving the rest of its transform alone.
    pub fn set_height(&mut self, id: NodeId, height: f32) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(&id).ok_or(SceneError::NodeNotFound(id))?;
        node.transform.position.y = height;
        Ok(())
    }

    /// First node with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| *id)
    }

    /// Read-only access to all nodes (BTreeMap for deterministic iteration).
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Mesh nodes in deterministic order.
    pub fn mesh_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .filter(|(_, node)| matches!(node.kind, NodeKind::Mesh { .. }))
            .map(|(id, node)| (*id, node))
    }

    /// The first light in the scene, if any.
    pub fn first_light(&self) -> Option<&HemisphericLight> {
        self.nodes.values().find_map(|node| match &node.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        })
    }

    /// The first camera in the scene, if any.
    pub fn first_camera(&self) -> Option<&CameraNode> {
        self.nodes.values().find_map(|node| match &node.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_node(name: &str, y: f32) -> Node {
        Node {
            name: name.into(),
            transform: Transform::at(Vec3::new(0.0, y, 0.0)),
            kind: NodeKind::Mesh {
                shape: MeshShape::Sphere {
                    diameter: 2.0,
                    segments: 32,
                },
                material: Material {
                    diffuse: Color::new(1.0, 0.0, 0.0),
                },
            },
        }
    }

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.first_light().is_none());
        assert!(scene.first_camera().is_none());
    }

    #[test]
    fn add_and_get() {
        let mut scene = Scene::new();
        let id = scene.add(sphere_node("ball", 2.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id).unwrap().name, "ball");
    }

    #[test]
    fn find_by_name() {
        let mut scene = Scene::new();
        let id = scene.add(sphere_node("ball", 2.0));
        assert_eq!(scene.find_by_name("ball"), Some(id));
        assert_eq!(scene.find_by_name("missing"), None);
    }

    #[test]
    fn set_height_moves_only_y() {
        let mut scene = Scene::new();
        let id = scene.add(sphere_node("ball", 2.0));
        scene.set_height(id, 4.5).unwrap();
        let t = scene.get(id).unwrap().transform;
        assert_eq!(t.position, Vec3::new(0.0, 4.5, 0.0));
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn set_transform_missing_node_errors() {
        let mut scene = Scene::new();
        let missing = NodeId::new();
        assert!(matches!(
            scene.set_transform(missing, Transform::default()),
            Err(SceneError::NodeNotFound(_))
        ));
    }

    #[test]
    fn mesh_nodes_skips_non_meshes() {
        let mut scene = Scene::new();
        scene.add(sphere_node("ball", 2.0));
        scene.add(Node {
            name: "light".into(),
            transform: Transform::default(),
            kind: NodeKind::Light(HemisphericLight {
                direction: Vec3::Y,
                intensity: 0.7,
            }),
        });
        assert_eq!(scene.mesh_nodes().count(), 1);
        assert!(scene.first_light().is_some());
    }

    #[test]
    fn deterministic_iteration_order() {
        let mut scene = Scene::new();
        let mut ids: Vec<NodeId> = (0..50)
            .map(|i| scene.add(sphere_node(&format!("node_{i}"), 1.0)))
            .collect();
        ids.sort();
        let stored: Vec<NodeId> = scene.nodes().keys().copied().collect();
        assert_eq!(stored, ids);
    }
}
