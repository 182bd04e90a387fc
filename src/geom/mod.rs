mod bbox;
mod locate;
mod ray;

use bbox::BoundingBox;
pub(crate) use bbox::{rect_contains, union_rect};
pub use locate::{locate, AreaIndex, Shape};
pub use ray::{multipolygon_contains, polygon_contains, ring_contains};
