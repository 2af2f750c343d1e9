use foundation::math::Vec3;

use crate::curve::QuadraticBezier;
use crate::mesh::Mesh;

/// Sweeps a circular cross-section of `radius` along the curve.
///
/// `samples` rings-to-rings spans along the curve, `radial_segments` vertices
/// per ring, open ends. Quality knobs are fixed by callers; the route
/// renderer uses 64 x 12.
pub fn sweep_tube(
    curve: &QuadraticBezier,
    samples: usize,
    radius: f64,
    radial_segments: usize,
) -> Mesh {
    if samples == 0 || radial_segments < 3 || radius <= 0.0 {
        return Mesh::new();
    }

    let centers = curve.sample(samples);
    let mut mesh = Mesh::new();

    for (i, center) in centers.iter().enumerate() {
        let t = i as f64 / samples as f64;
        let (side, up) = cross_section_frame(curve.tangent_at(t));
        for j in 0..radial_segments {
            let angle = std::f64::consts::TAU * j as f64 / radial_segments as f64;
            let offset = side * angle.cos() + up * angle.sin();
            mesh.push_vertex(*center + offset * radius, offset);
        }
    }

    let ring = radial_segments as u32;
    for i in 0..samples as u32 {
        for j in 0..ring {
            let j_next = (j + 1) % ring;
            let a = i * ring + j;
            let b = i * ring + j_next;
            let c = (i + 1) * ring + j_next;
            let d = (i + 1) * ring + j;
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
    }
    mesh
}

/// Two unit vectors orthogonal to the tangent and each other.
///
/// The reference axis switches away from world-up near vertical tangents so
/// the frame never collapses at the apex of a steep arc.
fn cross_section_frame(tangent: Vec3) -> (Vec3, Vec3) {
    let reference = if tangent.y.abs() > 0.99 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    };
    let side = reference.cross(tangent).normalize();
    let up = tangent.cross(side);
    (side, up)
}
