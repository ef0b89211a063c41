// Board
pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;

// Bird
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;

// Pipes
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;
/// Baseline y the random top-pipe offset is measured from.
pub const PIPE_BASE_Y: i32 = 0;

// Physics (units per frame)
pub const GRAVITY: i32 = 1;
pub const FLAP_VELOCITY: i32 = -9;
pub const SCROLL_VELOCITY: i32 = -4;

// Scoring: half a point per pipe, one point per top/bottom pair
pub const SCORE_PER_PIPE: f64 = 0.5;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000 / 60;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Terminal loop
pub const INPUT_POLL_MS: u64 = 8;
/// Longest stretch of wall time fed to the clock in one loop pass, so a
/// stalled terminal does not replay seconds of frames at once.
pub const MAX_CATCH_UP_MS: u64 = 250;
