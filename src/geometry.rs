//! Polygon helpers over the node ring: area, centroid, hit testing.

use crate::float::Float;
use crate::rect::Rect;
use crate::vec::Vec2;

pub fn distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    a.distance(b)
}

/// Signed shoelace area. Positive when the ring winds with increasing angle
/// (clockwise on a y-down screen).
pub fn signed_area<F: Float>(points: &[Vec2<F>]) -> F {
    signed_area_by(points.len(), |i| points[i])
}

/// Shoelace area over `n` vertices produced by `vertex`.
pub(crate) fn signed_area_by<F: Float>(n: usize, vertex: impl Fn(usize) -> Vec2<F>) -> F {
    if n < 3 {
        return F::zero();
    }
    let mut sum = F::zero();
    for i in 0..n {
        sum += vertex(i).cross(vertex((i + 1) % n));
    }
    sum * F::half()
}

/// Enclosed area using the shoelace formula.
pub fn polygon_area<F: Float>(points: &[Vec2<F>]) -> F {
    signed_area(points).abs()
}

/// Arithmetic mean of the points.
pub fn centroid<F: Float>(points: &[Vec2<F>]) -> Vec2<F> {
    centroid_by(points.len(), |i| points[i])
}

pub(crate) fn centroid_by<F: Float>(n: usize, vertex: impl Fn(usize) -> Vec2<F>) -> Vec2<F> {
    if n == 0 {
        return Vec2::zero();
    }
    let mut sum = Vec2::zero();
    for i in 0..n {
        sum += vertex(i);
    }
    sum.scale(F::one() / F::from_f32(n as f32))
}

/// Axis-aligned bounding box, or `None` for an empty slice.
pub fn bounding_box<F: Float>(points: &[Vec2<F>]) -> Option<Rect<F>> {
    let first = points.first()?;
    let (mut min, mut max) = (*first, *first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}

/// Ray-casting point-in-polygon test over `n` vertices produced by `vertex`.
fn ray_cast<F: Float>(n: usize, vertex: impl Fn(usize) -> Vec2<F>, point: Vec2<F>) -> bool {
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = vertex(i);
        let pj = vertex(j);
        let dy = pj.y - pi.y;
        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / dy.or_epsilon(F::from_f32(1e-10)) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Check if a point is inside the polygon using ray casting.
pub fn point_in_polygon<F: Float>(points: &[Vec2<F>], point: Vec2<F>) -> bool {
    ray_cast(points.len(), |i| points[i], point)
}

/// Point-in-polygon with the polygon pushed outward by `padding`.
///
/// Rejects cheaply against the padded bounding box first, then moves every
/// vertex `padding` further from the centroid before the precise ray cast.
pub fn point_in_polygon_padded<F: Float>(points: &[Vec2<F>], point: Vec2<F>, padding: F) -> bool {
    if padding <= F::zero() {
        return point_in_polygon(points, point);
    }
    let bounds = match bounding_box(points) {
        Some(b) => b.expand(padding),
        None => return false,
    };
    if !bounds.contains(point) {
        return false;
    }
    let c = centroid(points);
    ray_cast(
        points.len(),
        |i| {
            let offset = points[i] - c;
            match offset.try_normalize(F::from_f32(1e-6)) {
                Some(dir) => points[i] + dir.scale(padding),
                None => points[i],
            }
        },
        point,
    )
}
