use geo_types::Point;

/// Anything usable as a WGS84 coordinate: x is longitude, y is latitude.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Latitude in degrees (alias for `y`).
    fn lat(&self) -> f64 {
        self.y()
    }

    /// Longitude in degrees (alias for `x`).
    fn lon(&self) -> f64 {
        self.x()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
