//! Dreieckszerlegung einfacher Polygone (Ear Clipping).
//!
//! Wird vom egui-Backend genutzt, das nur konvexe Flächen direkt füllen kann.

use glam::Vec2;

const EPS: f32 = 1e-6;

/// Doppelte vorzeichenbehaftete Fläche (Shoelace).
fn signed_area2(points: &[Vec2]) -> f32 {
    (0..points.len())
        .map(|i| points[i].perp_dot(points[(i + 1) % points.len()]))
        .sum()
}

fn cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

fn contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2, orient: f32) -> bool {
    cross(a, b, p) * orient >= 0.0 && cross(b, c, p) * orient >= 0.0 && cross(c, a, p) * orient >= 0.0
}

fn is_ear(points: &[Vec2], ring: &[usize], i: usize, orient: f32) -> bool {
    let len = ring.len();
    let ia = ring[(i + len - 1) % len];
    let ib = ring[i];
    let ic = ring[(i + 1) % len];
    let (a, b, c) = (points[ia], points[ib], points[ic]);
    if cross(a, b, c) * orient <= EPS {
        return false;
    }
    ring.iter()
        .filter(|&&j| j != ia && j != ib && j != ic)
        .map(|&j| points[j])
        .filter(|&p| p != a && p != b && p != c)
        .all(|p| !contains(a, b, c, p, orient))
}

/// Zerlegt ein Polygon in Dreiecke (Indizes in `points`).
///
/// Beide Umlaufrichtungen sind erlaubt, aufeinanderfolgende Doppelpunkte
/// werden übersprungen. Findet sich kein Ohr mehr (Selbstüberschneidung),
/// wird der Rest als Fächer zerlegt.
pub fn triangulate(points: &[Vec2]) -> Vec<[u32; 3]> {
    let mut ring: Vec<usize> = (0..points.len())
        .filter(|&i| i == 0 || points[i] != points[i - 1])
        .collect();
    while ring.len() > 1 && points[ring[0]] == points[ring[ring.len() - 1]] {
        ring.pop();
    }
    if ring.len() < 3 {
        return Vec::new();
    }

    let ordered: Vec<Vec2> = ring.iter().map(|&i| points[i]).collect();
    let orient = if signed_area2(&ordered) >= 0.0 { 1.0 } else { -1.0 };

    let mut triangles = Vec::with_capacity(ring.len() - 2);
    while ring.len() > 3 {
        let len = ring.len();
        let Some(i) = (0..len).find(|&i| is_ear(points, &ring, i, orient)) else {
            break;
        };
        triangles.push([
            ring[(i + len - 1) % len] as u32,
            ring[i] as u32,
            ring[(i + 1) % len] as u32,
        ]);
        ring.remove(i);
    }

    for k in 1..ring.len() - 1 {
        triangles.push([ring[0] as u32, ring[k] as u32, ring[k + 1] as u32]);
    }
    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]
    }

    fn covered_area(points: &[Vec2], triangles: &[[u32; 3]]) -> f32 {
        triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| points[i as usize]);
                cross(a, b, c).abs() / 2.0
            })
            .sum()
    }

    fn covers(points: &[Vec2], triangles: &[[u32; 3]], p: Vec2) -> bool {
        triangles.iter().any(|t| {
            let [a, b, c] = t.map(|i| points[i as usize]);
            let orient = cross(a, b, c).signum();
            contains(a, b, c, p, orient)
        })
    }

    #[test]
    fn concave_l_shape_keeps_its_notch_empty() {
        let points = l_shape();
        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), points.len() - 2);
        assert!((covered_area(&points, &triangles) - 3.0).abs() < 1e-5);
        assert!(!covers(&points, &triangles, Vec2::new(1.5, 1.5)));
        assert!(covers(&points, &triangles, Vec2::new(0.5, 1.5)));
    }

    #[test]
    fn clockwise_winding_gives_same_area() {
        let mut points = l_shape();
        points.reverse();
        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), 4);
        assert!((covered_area(&points, &triangles) - 3.0).abs() < 1e-5);
        assert!(!covers(&points, &triangles, Vec2::new(1.5, 1.5)));
    }

    #[test]
    fn repeated_closing_point_is_ignored() {
        let mut points = l_shape();
        points.push(points[0]);
        let triangles = triangulate(&points);

        assert_eq!(triangles.len(), 4);
        assert!(triangles.iter().flatten().all(|&i| i < 6));
    }

    #[test]
    fn fewer_than_three_points_yield_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Vec2::ZERO, Vec2::X]).is_empty());
        assert!(triangulate(&[Vec2::ZERO, Vec2::ZERO, Vec2::ZERO]).is_empty());
    }

    #[test]
    fn self_intersecting_bowtie_still_produces_triangles() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
        ];
        assert_eq!(triangulate(&points).len(), 2);
    }
}
