use foundation::math::Vec3;
use geometry::QuadraticBezier;

/// Endpoints are lifted above pin and prop geometry so the tube never clips
/// through a marker.
pub const ENDPOINT_LIFT: f64 = 12.0;
/// Every arc clears at least this much above its lifted endpoints.
pub const ARC_HEIGHT_BASE: f64 = 40.0;
/// Longer trips arc visibly higher; a long flat arc would be unreadable.
pub const ARC_HEIGHT_PER_UNIT: f64 = 0.05;
/// Stylized map units to kilometers, for the published distance estimate.
pub const KM_PER_UNIT: f64 = 6.0;

/// Plans the travel arc between two location positions.
///
/// Pure: the curve depends only on the endpoints. The control point is the
/// lifted midpoint raised by the base arc height plus a term proportional to
/// the planar distance.
pub fn plan_route(from: Vec3, to: Vec3) -> QuadraticBezier {
    let lift = Vec3::new(0.0, ENDPOINT_LIFT, 0.0);
    let start = from + lift;
    let end = to + lift;
    let arc = ARC_HEIGHT_BASE + ARC_HEIGHT_PER_UNIT * from.distance_xz(to);
    let control = start.lerp(end, 0.5) + Vec3::new(0.0, arc, 0.0);
    QuadraticBezier::new(start, control, end)
}

/// Straight-line planar distance scaled to the map's stylized kilometers.
pub fn route_distance_km(from: Vec3, to: Vec3) -> f64 {
    from.distance_xz(to) * KM_PER_UNIT
}

/// The published human-readable estimate; display framing is the UI's job.
pub fn format_distance(km: f64) -> String {
    format!("~{} km", km.round() as i64)
}
