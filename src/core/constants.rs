/// Geometry, timing and physics tuning for the card.
///
/// Distances are CSS pixels, times are milliseconds unless the name says
/// otherwise. Angles for bursts are degrees, matching how they read on screen.
// Avoidance target
pub const PROXIMITY_THRESHOLD_PX: f32 = 70.0; // pointer closer than this triggers a jump
pub const NUDGE_DISTANCE_PX: f32 = 100.0; // length of every jump
pub const OFFSET_LIMIT_X_PX: f32 = 140.0; // keeps the button inside the 500px card
pub const OFFSET_LIMIT_Y_PX: f32 = 120.0;

// Button spring (stiffness / damping per unit mass)
pub const SPRING_STIFFNESS: f32 = 600.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // frame gaps beyond this are treated as this
pub const SPRING_REST_EPSILON: f32 = 0.05;

// Celebration burst loop
pub const BURST_DURATION_MS: f64 = 5000.0;
pub const BURST_PARTICLE_COUNT: u32 = 5;
pub const BURST_SPREAD_DEG: f32 = 55.0;
pub const BURST_LEFT_ANGLE_DEG: f32 = 60.0;
pub const BURST_RIGHT_ANGLE_DEG: f32 = 120.0;
pub const BURST_ORIGIN_Y: f32 = 0.5; // vertical origin, fraction of viewport height
pub const BURST_COLORS: [&str; 2] = ["#ff4d6d", "#ff758f"];

// Confetti particle physics (per frame)
pub const CONFETTI_START_VELOCITY: f32 = 45.0;
pub const CONFETTI_DECAY: f32 = 0.9;
pub const CONFETTI_GRAVITY: f32 = 1.0;
pub const CONFETTI_DRIFT: f32 = 0.0;
pub const CONFETTI_TICKS: u32 = 200;
pub const CONFETTI_SCALAR: f32 = 1.0;
pub const CONFETTI_TILT_STEP: f32 = 0.1;
pub const CONFETTI_WOBBLE_RADIUS: f32 = 10.0;

// Background hearts
pub const HEART_COUNT: usize = 25;
pub const HEART_LEFT_STEP_PCT: usize = 13;
pub const HEART_SIZE_BASE_PX: u32 = 15;
pub const HEART_SIZE_RANGE: usize = 20;
pub const HEART_DURATION_BASE_SEC: f32 = 5.0;
pub const HEART_DURATION_RANGE: usize = 7;
pub const HEART_DELAY_STEP_SEC: f32 = 0.3;
pub const HEART_PEAK_OPACITY: f32 = 0.4;
