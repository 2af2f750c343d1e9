//! Primitive solids for markers and landmark props, centered at the origin.

use foundation::math::Vec3;

use crate::mesh::Mesh;

pub fn uv_sphere(radius: f64, width_segments: usize, height_segments: usize) -> Mesh {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let mut mesh = Mesh::new();

    for lat in 0..=height_segments {
        let theta = std::f64::consts::PI * lat as f64 / height_segments as f64;
        for lon in 0..=width_segments {
            let phi = std::f64::consts::TAU * lon as f64 / width_segments as f64;
            let normal = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            mesh.push_vertex(normal * radius, normal);
        }
    }

    let stride = (width_segments + 1) as u32;
    for lat in 0..height_segments as u32 {
        for lon in 0..width_segments as u32 {
            let a = lat * stride + lon;
            let b = a + stride;
            if lat != 0 {
                mesh.push_triangle(a, a + 1, b + 1);
            }
            if lat != height_segments as u32 - 1 {
                mesh.push_triangle(a, b + 1, b);
            }
        }
    }
    mesh
}

pub fn cylinder(
    radius_top: f64,
    radius_bottom: f64,
    height: f64,
    radial_segments: usize,
) -> Mesh {
    let radial_segments = radial_segments.max(3);
    let mut mesh = Mesh::new();
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height.max(f64::EPSILON);

    // Side wall, seam column duplicated.
    for lon in 0..=radial_segments {
        let phi = std::f64::consts::TAU * lon as f64 / radial_segments as f64;
        let (sin, cos) = (phi.sin(), phi.cos());
        let normal = Vec3::new(cos, slope, sin).normalize();
        mesh.push_vertex(Vec3::new(cos * radius_top, half, sin * radius_top), normal);
        mesh.push_vertex(
            Vec3::new(cos * radius_bottom, -half, sin * radius_bottom),
            normal,
        );
    }
    for lon in 0..radial_segments as u32 {
        let top = lon * 2;
        let bottom = top + 1;
        let next_top = top + 2;
        let next_bottom = top + 3;
        mesh.push_triangle(top, bottom, next_bottom);
        mesh.push_triangle(top, next_bottom, next_top);
    }

    if radius_top > 0.0 {
        append_disc(&mut mesh, radius_top, half, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        append_disc(&mut mesh, radius_bottom, -half, radial_segments, false);
    }
    mesh
}

pub fn cone(radius: f64, height: f64, radial_segments: usize) -> Mesh {
    cylinder(0.0, radius, height, radial_segments)
}

fn append_disc(mesh: &mut Mesh, radius: f64, y: f64, radial_segments: usize, facing_up: bool) {
    let normal = Vec3::new(0.0, if facing_up { 1.0 } else { -1.0 }, 0.0);
    let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
    let ring_start = center + 1;
    for lon in 0..radial_segments {
        let phi = std::f64::consts::TAU * lon as f64 / radial_segments as f64;
        mesh.push_vertex(Vec3::new(phi.cos() * radius, y, phi.sin() * radius), normal);
    }
    for lon in 0..radial_segments as u32 {
        let a = ring_start + lon;
        let b = ring_start + (lon + 1) % radial_segments as u32;
        if facing_up {
            mesh.push_triangle(center, b, a);
        } else {
            mesh.push_triangle(center, a, b);
        }
    }
}

pub fn cuboid(size_x: f64, size_y: f64, size_z: f64) -> Mesh {
    let (hx, hy, hz) = (size_x / 2.0, size_y / 2.0, size_z / 2.0);
    let mut mesh = Mesh::new();

    // (normal, two in-plane axes) per face.
    let faces = [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
        (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0)),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 0.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
    ];
    let half = Vec3::new(hx, hy, hz);
    for (normal, u, v) in faces {
        let origin = Vec3::new(normal.x * hx, normal.y * hy, normal.z * hz);
        let u = Vec3::new(u.x * half.x, u.y * half.y, u.z * half.z);
        let v = Vec3::new(v.x * half.x, v.y * half.y, v.z * half.z);
        let a = mesh.push_vertex(origin - u - v, normal);
        let b = mesh.push_vertex(origin + u - v, normal);
        let c = mesh.push_vertex(origin + u + v, normal);
        let d = mesh.push_vertex(origin - u + v, normal);
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::{cone, cuboid, cylinder, uv_sphere};
    use foundation::math::Vec3;

    #[test]
    fn sphere_vertices_lie_on_the_radius() {
        let mesh = uv_sphere(2.6, 16, 16);
        for p in &mesh.positions {
            assert!((p.length() - 2.6).abs() < 1e-9);
        }
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-9);
        }
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn cylinder_spans_its_height_and_radii() {
        let mesh = cylinder(1.0, 6.0, 16.0, 6);
        let bb = mesh.bounds().unwrap();
        assert!((bb.max.y - 8.0).abs() < 1e-9);
        assert!((bb.min.y + 8.0).abs() < 1e-9);
        assert!((bb.max.x - 6.0).abs() < 1e-9);
    }

    #[test]
    fn cone_narrows_to_an_apex_ring() {
        let mesh = cone(22.0, 36.0, 6);
        let apex_count = mesh
            .positions
            .iter()
            .filter(|p| (p.y - 18.0).abs() < 1e-9)
            .filter(|p| p.x.abs() < 1e-9 && p.z.abs() < 1e-9)
            .count();
        assert!(apex_count > 0);
        // No top cap on a zero top radius.
        assert!(!mesh.normals.iter().any(|n| *n == Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn cuboid_is_centered_with_six_faces() {
        let mesh = cuboid(8.0, 4.0, 3.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        let bb = mesh.bounds().unwrap();
        assert_eq!(bb.min, Vec3::new(-4.0, -2.0, -1.5));
        assert_eq!(bb.max, Vec3::new(4.0, 2.0, 1.5));
    }
}
