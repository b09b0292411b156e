/// Cost multiplier for a keystroke that needs the SHIFT modifier.
pub const SHIFT_PENALTY: f64 = 2.0;

/// Ergonomic finger factors. Thumb, index and middle fingers stay at 1.0.
pub const PINKY_FACTOR: f64 = 1.2;
pub const RING_FACTOR: f64 = 1.1;

/// Characters captured on each side of a digit or number sequence.
pub const DEFAULT_CONTEXT_RADIUS: usize = 80;

/// Number sequences carried into the analysis result as sample contexts.
pub const SAMPLE_SEQUENCE_COUNT: usize = 5;

/// Profile used when no typist is requested, and for headline findings.
pub const DEFAULT_TYPIST: &str = "average";

/// Relative tolerance under which two scenario totals count as tied.
pub const COST_EPSILON: f64 = 1e-9;

pub const DEFAULT_WORKING_DAYS: u32 = 250;
pub const DEFAULT_HOURLY_COST: f64 = 15.0;
