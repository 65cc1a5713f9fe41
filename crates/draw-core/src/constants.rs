// Default draw tuning shared by the core and the web front-end.

// Draw shape
pub const RANGE_SIZE: u32 = 15; // numbers are drawn from 1..=RANGE_SIZE
pub const VISIBLE_COUNT: usize = 5; // balls revealed per draw

// Ball metrics (scene pixels)
pub const BALL_WIDTH: f32 = 72.0;
pub const BALL_HEIGHT: f32 = 72.0;
pub const SINGLE_DIGIT_LABEL_WIDTH: f32 = 30.0;
pub const DOUBLE_DIGIT_LABEL_WIDTH: f32 = 35.0;
pub const LABEL_HEIGHT: f32 = 45.0;
pub const SINGLE_DIGIT_MAX: u32 = 9; // anything above uses the wide label box

// Travel path
pub const TUBE_START_X: f32 = 137.0; // resting x of the leftmost ball
pub const BALL_ORIGIN_X: f32 = 900.0; // off-screen entry point, right of the tube
pub const BALL_LANE_Y: f32 = 768.0 / 2.0 - BALL_HEIGHT / 2.0 + 322.0;

// Timing (milliseconds)
pub const STAGGER_MS: u64 = 500;
pub const TRAVEL_MS: u64 = 2000;
pub const PULSE_MS: u64 = 200; // each half of the landing pulse

// Effects
pub const PULSE_SCALE_GAIN: f32 = 0.1;
pub const LABEL_BLUR_X: f32 = 8.0;
pub const SHADOW_BLUR: f32 = 1.0;
pub const SHADOW_DISTANCE: f32 = 15.0;
pub const SHADOW_ANGLE_DEG: f32 = 90.0;

// Asset naming
pub const ASSET_ROOT: &str = "assets/";
pub const ASSET_EXTENSION: &str = ".png";
pub const LABEL_ASSET_PREFIX: &str = "n";
