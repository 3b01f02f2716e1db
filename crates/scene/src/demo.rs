//! The canonical bounce-demo scene: a red sphere over a green ground plane,
//! one hemispheric light, one camera.

use crate::{CameraNode, HemisphericLight, Material, MeshShape, Node, NodeKind, Scene};
use glam::Vec3;
use rebound_common::{Color, NodeId, Transform};

/// Height the sphere starts at, matching the simulation's initial drop height.
pub const SPHERE_START_HEIGHT: f32 = 2.0;

/// The demo scene plus the ids a host needs to drive and render it.
#[derive(Debug, Clone)]
pub struct BounceScene {
    pub scene: Scene,
    pub sphere: NodeId,
    pub ground: NodeId,
    pub camera: NodeId,
    pub light: NodeId,
}

/// Build the bounce-demo scene.
///
/// Camera at (0, 5, -10) looking at the origin; a hemispheric light aimed
/// straight up at intensity 0.7; a red sphere of diameter 2 starting two
/// units up; a 6x6 green ground plane at the origin.
pub fn bounce_scene() -> BounceScene {
    let mut scene = Scene::new();

    let camera = scene.add(Node {
        name: "camera".into(),
        transform: Transform::at(Vec3::new(0.0, 5.0, -10.0)),
        kind: NodeKind::Camera(CameraNode {
            eye: Vec3::new(0.0, 5.0, -10.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
        }),
    });

    let light = scene.add(Node {
        name: "light".into(),
        transform: Transform::default(),
        kind: NodeKind::Light(HemisphericLight {
            direction: Vec3::Y,
            intensity: 0.7,
        }),
    });

    let sphere = scene.add(Node {
        name: "sphere".into(),
        transform: Transform::at(Vec3::new(0.0, SPHERE_START_HEIGHT, 0.0)),
        kind: NodeKind::Mesh {
            shape: MeshShape::Sphere {
                diameter: 2.0,
                segments: 32,
            },
            material: Material {
                diffuse: Color::new(1.0, 0.0, 0.0),
            },
        },
    });

    let ground = scene.add(Node {
        name: "ground".into(),
        transform: Transform::default(),
        kind: NodeKind::Mesh {
            shape: MeshShape::Ground {
                width: 6.0,
                depth: 6.0,
            },
            material: Material {
                diffuse: Color::new(0.5, 0.8, 0.5),
            },
        },
    });

    BounceScene {
        scene,
        sphere,
        ground,
        camera,
        light,
    }
}
