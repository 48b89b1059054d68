//! Integer geometry predicates used by polygon fill.
//!
//! Everything here is exact. Products are widened to `i64`, which holds
//! for any coordinates within +/-2^30.

use crate::types::Point;

/// Smaller of two values.
pub fn min(a: i32, b: i32) -> i32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values.
pub fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Cross product of `a -> b` and `a -> c` (twice the signed triangle area).
///
/// Positive when `c` lies to the left of `a -> b` in a y-up frame, negative
/// when to the right, zero when the three points are collinear.
pub fn cross_product(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);
    let (cx, cy) = (c.x as i64, c.y as i64);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Check if `p` lies on the closed segment `a`-`b`, endpoints included.
pub fn is_on_segment(p: Point, a: Point, b: Point) -> bool {
    if cross_product(a, p, b) != 0 {
        return false;
    }

    p.x >= min(a.x, b.x) && p.x <= max(a.x, b.x) && p.y >= min(a.y, b.y) && p.y <= max(a.y, b.y)
}

/// Iterate the directed edges of a closed polygon, including last -> first.
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Winding number of a closed polygon around `p`.
///
/// Upward edges (`current.y <= p.y < next.y`) with `p` on their left count
/// +1; downward edges (`next.y <= p.y < current.y`) with `p` on their right
/// count -1. The half-open test keeps shared vertices from counting twice.
pub fn winding_number(p: Point, vertices: &[Point]) -> i32 {
    let mut winding = 0;

    for (current, next) in edges(vertices) {
        let side = cross_product(current, next, p);

        if current.y <= p.y {
            if next.y > p.y && side > 0 {
                winding += 1;
            }
        } else if next.y <= p.y && side < 0 {
            winding -= 1;
        }
    }

    winding
}

/// Check if `p` is inside the closed polygon.
///
/// Points on any edge are always inside. Otherwise the point is inside iff
/// the winding number is non-zero, so both vertex orders give the same
/// answer.
pub fn is_in_polygon(p: Point, vertices: &[Point]) -> bool {
    if edges(vertices).any(|(a, b)| is_on_segment(p, a, b)) {
        return true;
    }

    winding_number(p, vertices) != 0
}

/// Inclusive axis-aligned bounding box as `(min, max)` corners.
///
/// Returns `None` for an empty vertex list.
pub fn bounding_box(vertices: &[Point]) -> Option<(Point, Point)> {
    let first = *vertices.first()?;

    Some(vertices.iter().fold((first, first), |(lo, hi), v| {
        (
            Point::new(min(lo.x, v.x), min(lo.y, v.y)),
            Point::new(max(hi.x, v.x), max(hi.y, v.y)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn square() -> Vec<Point> {
        // Legacy five-vertex form: last vertex repeats the first
        pts(&[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)])
    }

    fn pentagon() -> Vec<Point> {
        pts(&[(20, 2), (36, 14), (30, 32), (10, 32), (4, 14)])
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(3, -2), -2);
        assert_eq!(max(3, -2), 3);
        assert_eq!(min(4, 4), 4);
    }

    #[test]
    fn test_cross_product_sign() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 0);
        assert!(cross_product(a, b, Point::new(5, 5)) > 0);
        assert!(cross_product(a, b, Point::new(5, -5)) < 0);
        assert_eq!(cross_product(a, b, Point::new(20, 0)), 0);
        assert_eq!(cross_product(a, b, Point::new(3, 4)), 40);
    }

    #[test]
    fn test_cross_product_no_overflow() {
        let big = 1 << 30;
        let a = Point::new(-big, -big);
        let b = Point::new(big, -big);
        let c = Point::new(-big, big);
        assert_eq!(cross_product(a, b, c), 1 << 62);
    }

    #[test]
    fn test_on_segment_endpoints() {
        let a = Point::new(2, 3);
        let b = Point::new(8, 6);
        assert!(is_on_segment(a, a, b));
        assert!(is_on_segment(b, a, b));
        assert!(is_on_segment(Point::new(4, 4), a, b));
        assert!(!is_on_segment(Point::new(10, 7), a, b)); // collinear, beyond b
        assert!(!is_on_segment(Point::new(4, 5), a, b));
    }

    #[test]
    fn test_on_degenerate_segment() {
        let a = Point::new(5, 5);
        assert!(is_on_segment(a, a, a));
        assert!(!is_on_segment(Point::new(5, 6), a, a));
    }

    #[test]
    fn test_square_inside_outside() {
        let square = square();
        assert!(is_in_polygon(Point::new(5, 5), &square));
        assert!(!is_in_polygon(Point::new(15, 15), &square));
        assert!(!is_in_polygon(Point::new(-1, 5), &square));
        assert_ne!(winding_number(Point::new(5, 5), &square), 0);
    }

    #[test]
    fn test_every_edge_point_is_inside() {
        for polygon in [square(), pentagon()] {
            for (a, b) in edges(&polygon) {
                let (lo, hi) = bounding_box(&[a, b]).unwrap();
                for y in lo.y..=hi.y {
                    for x in lo.x..=hi.x {
                        let p = Point::new(x, y);
                        if is_on_segment(p, a, b) {
                            assert!(is_in_polygon(p, &polygon), "{} on edge {}-{}", p, a, b);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_reversed_order_agrees() {
        for polygon in [square(), pentagon()] {
            let reversed: Vec<Point> = polygon.iter().rev().copied().collect();
            let (lo, hi) = bounding_box(&polygon).unwrap();

            for y in lo.y - 2..=hi.y + 2 {
                for x in lo.x - 2..=hi.x + 2 {
                    let p = Point::new(x, y);
                    assert_eq!(
                        is_in_polygon(p, &polygon),
                        is_in_polygon(p, &reversed),
                        "disagree at {}",
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn test_winding_sign_follows_orientation() {
        let tri = pts(&[(0, 0), (10, 0), (0, 10)]);
        let rev: Vec<Point> = tri.iter().rev().copied().collect();
        let p = Point::new(2, 2);
        assert_eq!(winding_number(p, &tri), -winding_number(p, &rev));
    }

    #[test]
    fn test_vertex_row_not_double_counted() {
        // The row y = 5 passes through vertices (5, 5) and (15, 5)
        let diamond = pts(&[(10, 0), (15, 5), (10, 10), (5, 5)]);
        assert!(!is_in_polygon(Point::new(0, 5), &diamond));
        assert!(!is_in_polygon(Point::new(20, 5), &diamond));
        assert!(is_in_polygon(Point::new(10, 5), &diamond));
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(
            bounding_box(&pentagon()),
            Some((Point::new(4, 2), Point::new(36, 32)))
        );
        assert_eq!(bounding_box(&[]), None);
    }
}
