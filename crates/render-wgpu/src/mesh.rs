use bytemuck::{Pod, Zeroable};
use rebound_scene::MeshShape;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side triangle mesh, ready for upload.
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build the mesh for a scene shape.
    pub fn from_shape(shape: MeshShape) -> Self {
        match shape {
            MeshShape::Sphere { diameter, segments } => sphere(diameter, segments),
            MeshShape::Ground { width, depth } => ground(width, depth),
        }
    }
}

/// UV sphere centered on the origin.
///
/// `segments` controls both rings and sectors; winding is
/// counter-clockwise viewed from outside.
fn sphere(diameter: f32, segments: u32) -> MeshData {
    let radius = diameter / 2.0;
    let segments = segments.max(3);
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=segments {
        let phi = std::f32::consts::PI * (ring as f32) / (segments as f32);
        let y = phi.cos();
        let r = phi.sin();

        for sector in 0..=segments {
            let theta = 2.0 * std::f32::consts::PI * (sector as f32) / (segments as f32);
            let x = r * theta.cos();
            let z = r * theta.sin();

            vertices.push(Vertex {
                position: [x * radius, y * radius, z * radius],
                normal: [x, y, z],
            });
        }
    }

    for ring in 0..segments {
        for sector in 0..segments {
            let current = ring * (segments + 1) + sector;
            let next = current + segments + 1;

            indices.push(current);
            indices.push(current + 1);
            indices.push(next);

            indices.push(current + 1);
            indices.push(next + 1);
            indices.push(next);
        }
    }

    MeshData { vertices, indices }
}

/// Flat rectangle in the XZ plane, facing +Y, centered on the origin.
fn ground(width: f32, depth: f32) -> MeshData {
    let hw = width / 2.0;
    let hd = depth / 2.0;
    let up = [0.0, 1.0, 0.0];

    let vertices = vec![
        Vertex {
            position: [-hw, 0.0, -hd],
            normal: up,
        },
        Vertex {
            position: [hw, 0.0, -hd],
            normal: up,
        },
        Vertex {
            position: [hw, 0.0, hd],
            normal: up,
        },
        Vertex {
            position: [-hw, 0.0, hd],
            normal: up,
        },
    ];
    let indices = vec![0, 2, 1, 0, 3, 2];

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn sphere_vertex_and_index_counts() {
        let mesh = sphere(2.0, 32);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_eq!(mesh.indices.len(), (32 * 32 * 6) as usize);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = sphere(2.0, 16);
        for v in &mesh.vertices {
            assert!((length(v.position) - 1.0).abs() < 1e-4);
            assert!((length(v.normal) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_indices_in_bounds() {
        let mesh = sphere(2.0, 8);
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn sphere_triangles_face_outward() {
        let mesh = sphere(2.0, 8);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [
                mesh.vertices[tri[0] as usize].position,
                mesh.vertices[tri[1] as usize].position,
                mesh.vertices[tri[2] as usize].position,
            ];
            let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let n = [
                u[1] * v[2] - u[2] * v[1],
                u[2] * v[0] - u[0] * v[2],
                u[0] * v[1] - u[1] * v[0],
            ];
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            let dot = n[0] * centroid[0] + n[1] * centroid[1] + n[2] * centroid[2];
            // Skip degenerate cap triangles; everything else must face outward.
            if length(n) > 1e-6 {
                assert!(dot > 0.0, "inward-facing triangle {tri:?}");
            }
        }
    }

    #[test]
    fn ground_spans_requested_extent() {
        let mesh = ground(6.0, 6.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        for v in &mesh.vertices {
            assert_eq!(v.position[0].abs(), 3.0);
            assert_eq!(v.position[2].abs(), 3.0);
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn ground_triangles_face_up() {
        let mesh = ground(4.0, 2.0);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [
                mesh.vertices[tri[0] as usize].position,
                mesh.vertices[tri[1] as usize].position,
                mesh.vertices[tri[2] as usize].position,
            ];
            let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let ny = u[2] * v[0] - u[0] * v[2];
            assert!(ny > 0.0);
        }
    }

    #[test]
    fn from_shape_dispatches() {
        let sphere_mesh = MeshData::from_shape(MeshShape::Sphere {
            diameter: 2.0,
            segments: 8,
        });
        let ground_mesh = MeshData::from_shape(MeshShape::Ground {
            width: 6.0,
            depth: 6.0,
        });
        assert!(sphere_mesh.vertices.len() > ground_mesh.vertices.len());
    }
}
