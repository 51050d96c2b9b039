use serde::Serialize;

/// Viewport rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn south_west(&self) -> (f64, f64) {
        (self.south, self.west)
    }

    pub fn north_east(&self) -> (f64, f64) {
        (self.north, self.east)
    }

    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }
}
