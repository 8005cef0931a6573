use serde::{Deserialize, Serialize};

/// Rectangular item to be assigned to a level.
/// Its identity is its position in the [`Instance`](crate::entities::Instance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal extent, consumes capacity of the level
    pub length: f64,
    /// Vertical extent, the tallest item of a level determines its height
    pub height: f64,
    /// Priority of the item, multiplied with the base height of its level
    pub weight: f64,
}

impl Rect {
    pub fn new(length: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            height,
            weight,
        }
    }

    pub fn area(&self) -> f64 {
        self.length * self.height
    }

    /// Weight per unit of area.
    /// Items without area are infinitely dense if they carry any weight at all.
    pub fn density(&self) -> f64 {
        let area = self.area();
        if area > 0.0 {
            self.weight / area
        } else if self.weight > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }
}
