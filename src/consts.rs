pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;

/// Top edge of the static floor slab.
pub const TOP_OF_FLOOR: f64 = HEIGHT - 20.0;
