//! Depth ordering of a tick's triangle list before it is drawn.
//!
//! Triangles are painted in list order, so whatever ends up last wins a pixel.

use crate::render::Triangle;

/// Which end of the depth range gets painted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthOrder {
    /// Ascending `avg_depth`: the closest triangle is drawn first and farther
    /// ones paint over it. This is the renderer's long-standing behaviour.
    #[default]
    NearestFirst,
    /// Descending `avg_depth`: classic painter's algorithm, far to near.
    FarthestFirst,
}

impl DepthOrder {
    /// Reorders `triangles` in place.
    ///
    /// Compares every pair and swaps out-of-order ones, so it is O(n²). Face
    /// counts per frame are small; equal depths may end up in any order.
    pub fn sort(self, triangles: &mut [Triangle]) {
        let len = triangles.len();
        for i in 0..len {
            for j in (i + 1)..len {
                if self.should_swap(triangles[i].avg_depth, triangles[j].avg_depth) {
                    triangles.swap(i, j);
                }
            }
        }
    }

    #[inline]
    fn should_swap(self, earlier: f32, later: f32) -> bool {
        match self {
            DepthOrder::NearestFirst => later < earlier,
            DepthOrder::FarthestFirst => later > earlier,
        }
    }
}

impl std::fmt::Display for DepthOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthOrder::NearestFirst => write!(f, "nearest-first"),
            DepthOrder::FarthestFirst => write!(f, "farthest-first"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn tri(avg_depth: f32) -> Triangle {
        Triangle::new([Vec2::ZERO; 3], 0xFFFFFFFF, avg_depth)
    }

    fn depths(triangles: &[Triangle]) -> Vec<f32> {
        triangles.iter().map(|t| t.avg_depth).collect()
    }

    #[test]
    fn nearest_first_is_ascending() {
        let mut triangles = vec![tri(3.0), tri(1.0), tri(2.0)];
        DepthOrder::NearestFirst.sort(&mut triangles);
        assert_eq!(depths(&triangles), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn farthest_first_is_descending() {
        let mut triangles = vec![tri(3.0), tri(1.0), tri(2.0)];
        DepthOrder::FarthestFirst.sort(&mut triangles);
        assert_eq!(depths(&triangles), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn larger_lists_are_fully_ordered() {
        let input = [5.5, -1.0, 4.0, 4.0, 9.25, 0.0, 2.0, 7.0];
        let mut triangles: Vec<_> = input.iter().copied().map(tri).collect();
        DepthOrder::default().sort(&mut triangles);
        let sorted = depths(&triangles);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted.len(), input.len());
    }

    #[test]
    fn empty_and_single_are_untouched() {
        let mut none: Vec<Triangle> = Vec::new();
        DepthOrder::NearestFirst.sort(&mut none);
        let mut one = vec![tri(1.0)];
        DepthOrder::NearestFirst.sort(&mut one);
        assert_eq!(depths(&one), vec![1.0]);
    }
}
