use earcutr::earcut;
use foundation::math::{Vec2, Vec3};

use crate::mesh::Mesh;
use crate::path::Path2D;

/// Fixed quality knobs for landmass extrusion. Defaults match the stylized
/// island look: shallow solid, chamfered rim, 12 chords per rounded corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExtrudeOptions {
    pub depth: f64,
    pub bevel_thickness: f64,
    pub bevel_size: f64,
    pub curve_segments: usize,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self {
            depth: 8.0,
            bevel_thickness: 3.0,
            bevel_size: 2.0,
            curve_segments: 12,
        }
    }
}

/// Extrudes a closed outline into a solid standing on the horizontal plane.
///
/// The outline's 2D plane becomes the xz map plane; the solid rises along +y
/// from a bottom cap at y = 0 through a vertical wall to `depth`, then a
/// chamfer band that climbs `bevel_thickness` while pulling the rim inward by
/// `bevel_size`, and a flat top cap. The chamfer keeps the silhouette inside
/// the original boundary; rounding and beveling never push outward.
///
/// A degenerate outline (under 3 ring points after sampling) produces an
/// empty mesh.
pub fn extrude_outline(path: &Path2D, opts: &ExtrudeOptions) -> Mesh {
    let mut ring = path.sample(opts.curve_segments);
    if ring.len() < 3 {
        return Mesh::new();
    }
    ensure_counter_clockwise(&mut ring);

    let outward = ring_outward_normals(&ring);
    let inset: Vec<Vec2> = ring
        .iter()
        .zip(&outward)
        .map(|(p, n)| *p - *n * opts.bevel_size)
        .collect();

    let wall_top = opts.depth;
    let crown = opts.depth + opts.bevel_thickness;

    let mut mesh = Mesh::new();
    append_cap(&mut mesh, &ring, 0.0, false);
    append_band(
        &mut mesh,
        &ring,
        &ring,
        0.0,
        wall_top,
        &outward
            .iter()
            .map(|n| Vec3::new(n.x, 0.0, n.y))
            .collect::<Vec<_>>(),
    );
    if opts.bevel_thickness > 0.0 || opts.bevel_size > 0.0 {
        let slope: Vec<Vec3> = outward
            .iter()
            .map(|n| {
                Vec3::new(
                    n.x * opts.bevel_thickness,
                    opts.bevel_size,
                    n.y * opts.bevel_thickness,
                )
                .normalize()
            })
            .collect();
        append_band(&mut mesh, &ring, &inset, wall_top, crown, &slope);
        append_cap(&mut mesh, &inset, crown, true);
    } else {
        append_cap(&mut mesh, &ring, wall_top, true);
    }
    mesh
}

/// Reverses the ring in place if its winding is clockwise, so edge normals
/// computed from travel direction always point outward.
fn ensure_counter_clockwise(ring: &mut [Vec2]) {
    if signed_area(ring) < 0.0 {
        ring.reverse();
    }
}

fn signed_area(ring: &[Vec2]) -> f64 {
    let n = ring.len();
    let mut twice_area = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        twice_area += a.x * b.y - b.x * a.y;
    }
    0.5 * twice_area
}

/// Per-vertex outward normals: the normalized average of the two adjacent
/// edge normals. The outline is smooth (rounded corners), so the averaged
/// normal is well-conditioned and a plain normal offset is a valid inset.
fn ring_outward_normals(ring: &[Vec2]) -> Vec<Vec2> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let curr = ring[i];
        let next = ring[(i + 1) % n];
        let before = edge_outward(prev, curr);
        let after = edge_outward(curr, next);
        out.push((before + after).normalize());
    }
    out
}

fn edge_outward(a: Vec2, b: Vec2) -> Vec2 {
    // Right-hand side of travel; outward for a counter-clockwise ring.
    let d = (b - a).normalize();
    Vec2::new(d.y, -d.x)
}

fn append_cap(mesh: &mut Mesh, ring: &[Vec2], height: f64, facing_up: bool) {
    let mut coords: Vec<f64> = Vec::with_capacity(ring.len() * 2);
    for p in ring {
        coords.push(p.x);
        coords.push(p.y);
    }
    let hole_indices: Vec<usize> = Vec::new();
    let triangles = match earcut(&coords, &hole_indices, 2) {
        Ok(ix) => ix,
        Err(_) => return,
    };

    let normal = if facing_up {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(0.0, -1.0, 0.0)
    };
    let base = ring
        .iter()
        .map(|p| mesh.push_vertex(Vec3::new(p.x, height, p.y), normal))
        .collect::<Vec<_>>();

    for tri in triangles.chunks_exact(3) {
        let (Some(&a), Some(&b), Some(&c)) =
            (base.get(tri[0]), base.get(tri[1]), base.get(tri[2]))
        else {
            continue;
        };
        if facing_up {
            mesh.push_triangle(a, c, b);
        } else {
            mesh.push_triangle(a, b, c);
        }
    }
}

/// One quad strip between two rings of equal length, with shared per-vertex
/// normals top and bottom.
fn append_band(
    mesh: &mut Mesh,
    lower_ring: &[Vec2],
    upper_ring: &[Vec2],
    lower_y: f64,
    upper_y: f64,
    normals: &[Vec3],
) {
    let n = lower_ring.len();
    let lower: Vec<u32> = (0..n)
        .map(|i| {
            mesh.push_vertex(
                Vec3::new(lower_ring[i].x, lower_y, lower_ring[i].y),
                normals[i],
            )
        })
        .collect();
    let upper: Vec<u32> = (0..n)
        .map(|i| {
            mesh.push_vertex(
                Vec3::new(upper_ring[i].x, upper_y, upper_ring[i].y),
                normals[i],
            )
        })
        .collect();

    for i in 0..n {
        let j = (i + 1) % n;
        mesh.push_triangle(lower[i], lower[j], upper[j]);
        mesh.push_triangle(lower[i], upper[j], upper[i]);
    }
}
