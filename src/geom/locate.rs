use geo::{Coord, MultiPolygon, Rect};
use rstar::{RTree, AABB};

use crate::geom::{multipolygon_contains, rect_contains, BoundingBox};

/// A polygonal shape with a precomputed bounding rectangle.
pub trait Shape {
    fn geometry(&self) -> &MultiPolygon<f64>;
    fn bounds(&self) -> Rect<f64>;
}

/// Whether `shape` contains the point, checking the bounding box first.
fn shape_contains<S: Shape>(shape: &S, point: Coord<f64>) -> bool {
    rect_contains(&shape.bounds(), point) && multipolygon_contains(shape.geometry(), point)
}

/// Index of the first shape containing (`lat`, `lon`), scanning in order.
/// Overlapping shapes are not disambiguated; the earliest one wins.
pub fn locate<S: Shape>(lat: f64, lon: f64, shapes: &[S]) -> Option<usize> {
    let point = Coord { x: lon, y: lat };
    shapes.iter().position(|shape| shape_contains(shape, point))
}

/// R-tree over shape bounding boxes, answering the same query as [`locate`]
/// without visiting every shape.
#[derive(Debug, Clone)]
pub struct AreaIndex {
    rtree: RTree<BoundingBox>,
}

impl AreaIndex {
    /// Build an index over `shapes`. Indices returned later refer to this slice.
    pub fn new<S: Shape>(shapes: &[S]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                shapes.iter().enumerate()
                    .map(|(i, shape)| BoundingBox::new(i, shape.bounds()))
                    .collect()
            ),
        }
    }

    /// Get the number of indexed shapes.
    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    /// Check if the index is empty.
    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Index of the first shape (in slice order) containing (`lat`, `lon`).
    pub fn locate<S: Shape>(&self, lat: f64, lon: f64, shapes: &[S]) -> Option<usize> {
        let point = Coord { x: lon, y: lat };

        let mut candidates = self.rtree
            .locate_in_envelope_intersecting(&AABB::from_point([lon, lat]))
            .map(BoundingBox::idx)
            .collect::<Vec<_>>();
        candidates.sort_unstable();

        candidates.into_iter()
            .find(|&i| shapes.get(i).is_some_and(|shape| shape_contains(shape, point)))
    }
}
