use crate::geom::AreaIndex;
use crate::map::BoundaryFeature;

/// State outlines plus the area polygons wages are joined to.
#[derive(Debug, Clone)]
pub struct Boundaries {
    states: Vec<BoundaryFeature>,
    areas: Vec<BoundaryFeature>,
    index: AreaIndex, // Over `areas`
}

impl Boundaries {
    /// Construct from already-parsed features, indexing the area polygons.
    pub fn new(states: Vec<BoundaryFeature>, areas: Vec<BoundaryFeature>) -> Self {
        Self { index: AreaIndex::new(&areas), states, areas }
    }

    /// Get the state features in input order.
    #[inline] pub fn states(&self) -> &[BoundaryFeature] { &self.states }

    /// Get the area features in input order.
    #[inline] pub fn areas(&self) -> &[BoundaryFeature] { &self.areas }

    /// Index of the first area (in input order) containing (`lat`, `lon`).
    #[inline]
    pub fn locate_area(&self, lat: f64, lon: f64) -> Option<usize> {
        self.index.locate(lat, lon, &self.areas)
    }
}
