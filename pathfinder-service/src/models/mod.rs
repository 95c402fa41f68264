use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A grid cell. Coordinates are signed so any integer a client sends can be
/// represented, including cells outside the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `self` moved by `offset`, or `None` if a coordinate would overflow.
    pub fn checked_offset(self, offset: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// True when `other` is exactly one step away along one axis.
    pub fn is_adjacent(self, other: Point) -> bool {
        matches!(
            (self.x.abs_diff(other.x), self.y.abs_diff(other.y)),
            (0, 1) | (1, 0)
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered cells from start to end inclusive.
pub type Path = Vec<Point>;

/// Decode an explicit JSON `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
