/// Rivalry workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// State code reported when percept one is dominant.
pub const STATE_PERCEPT_ONE: i32 = 1;

/// State code reported when percept two is dominant.
pub const STATE_PERCEPT_TWO: i32 = 2;

/// Default state code for mixed perception.
pub const DEFAULT_MIXED_STATE: i32 = 3;

/// Default decay time constant, as a multiple of the mean interval duration.
pub const DEFAULT_TAU_NORMALIZED: f64 = 1.0;

/// Default dominance weight assigned to mixed-perception intervals.
pub const DEFAULT_MIXED_VALUE: f64 = 0.5;
