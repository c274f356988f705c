use crate::geometry::r2::R2;

use super::Polygon;

impl Polygon {
    /// True iff the cyclic edge sequence has no self-intersections, no
    /// boundary contact between non-adjacent edges, and no degenerate
    /// (zero-length) edges.
    ///
    /// Recomputed from scratch in O(N²); this is the dominant per-move cost
    /// of the annealer. An incremental variant could check only the two
    /// edges touched by a move, but all callers go through this one
    /// predicate so that swap stays localized.
    pub fn is_simple(&self) -> bool {
        let n = self.vertices.len();

        for i in 0..n {
            if self.vertices[i] == self.vertices[(i + 1) % n] {
                return false;
            }
        }
        if n < 4 {
            // Triangles can't self-intersect
            return true;
        }

        // Check all pairs of non-adjacent edges
        for i in 0..n {
            let a0 = &self.vertices[i];
            let a1 = &self.vertices[(i + 1) % n];

            // Only check edges that aren't adjacent (skip i+1, i-1)
            for j in (i + 2)..n {
                // Skip if j is adjacent to i (wraps around for last edge)
                if j == (i + n - 1) % n || (i == 0 && j == n - 1) {
                    continue;
                }

                let b0 = &self.vertices[j];
                let b1 = &self.vertices[(j + 1) % n];

                if segments_intersect(a0, a1, b0, b1) {
                    return false;
                }
            }
        }
        true
    }
}

/// Check if two line segments cross or touch. Only ever called on
/// non-adjacent polygon edges, so a shared endpoint is itself a defect.
fn segments_intersect(a0: &R2, a1: &R2, b0: &R2, b1: &R2) -> bool {
    let d1 = cross_sign(b0, b1, a0);
    let d2 = cross_sign(b0, b1, a1);
    let d3 = cross_sign(a0, a1, b0);
    let d4 = cross_sign(a0, a1, b1);

    // Proper crossing: endpoints on opposite sides of each other's lines
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    // Degenerate contact: an endpoint lies exactly on the other segment
    (d1 == 0.0 && on_segment(b0, b1, a0))
        || (d2 == 0.0 && on_segment(b0, b1, a1))
        || (d3 == 0.0 && on_segment(a0, a1, b0))
        || (d4 == 0.0 && on_segment(a0, a1, b1))
}

/// Whether `p`, already known to be collinear with (a, b), lies within the
/// segment's bounding box.
fn on_segment(a: &R2, b: &R2, p: &R2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Cross product sign: (b - a) × (c - a)
fn cross_sign(a: &R2, b: &R2, c: &R2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
