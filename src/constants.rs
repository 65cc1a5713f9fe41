// Scene layout and asset naming for the browser front-end.
// Rectangles are in scene pixels on the fixed 1024x768 stage; the canvas is
// letterboxed to that aspect ratio and scaled.
use draw_core::layout::Rect;

pub const SCREEN_WIDTH: f32 = 1024.0;
pub const SCREEN_HEIGHT: f32 = 768.0;

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const CONFIG_ELEMENT_ID: &str = "draw-config"; // optional JSON over DrawConfig defaults
pub const MANIFEST_ELEMENT_ID: &str = "asset-manifest"; // optional JSON replacing the default manifest

// Background layer
pub const TUBE_RECT: Rect = Rect::new(0.0, 650.0, 1024.0, 120.0);

// Windows the balls are visible through
pub const GLASS_MASK_RECT: Rect = Rect::new(136.0, 669.0, 394.0, 79.0);
pub const PEEK_MASK_RECT: Rect = Rect::new(719.0, 671.0, 83.0, 79.0);
// Flattened into one mask image; a ball shows wherever any window covers it
pub const WINDOW_MASKS: &[(&str, Rect)] = &[
    ("glassmask", GLASS_MASK_RECT),
    ("peekmask", PEEK_MASK_RECT),
];

// Foreground layer
pub const WINDOW_SHINE_RECT: Rect = Rect::new(132.0, 669.0, 400.0, 46.0);
pub const PEEK_SHINE_RECT: Rect = Rect::new(719.0, 671.0, 83.0, 46.0);
pub const SHINE_ALPHA: f64 = 0.7;
pub const PLAY_BUTTON_RECT: Rect = Rect::new(900.0, 690.0, 100.0, 50.0);

// Ball effects as drawn on a 2D canvas
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.55)";
pub const LABEL_SMEAR_SAMPLES: usize = 5; // copies used to fake the horizontal blur
pub const LABEL_SMEAR_ALPHA: f64 = 0.32; // per copy; overlapping copies read as opaque

// Sprites the scene draws regardless of the draw result
pub const SCENE_SPRITES: &[&str] = &[
    "tube",
    "glassmask",
    "peekmask",
    "windowshine",
    "peekshine",
    "playbutton_off",
    "playbutton_on",
    "playbutton_dis",
    "redb",
    "yellowb",
    "blueb",
];

// Audio
pub const SOUND_ROOT: &str = "assets/";
pub const BALL_SOUND: &str = "ballSound";
pub const BALL_SOUND_FILE: &str = "ballSound.mp4";
pub const BACKGROUND_SOUND: &str = "backgroundSound";
pub const BACKGROUND_SOUND_FILE: &str = "hotShotDoubleShotSound.mp4";
pub const MASTER_GAIN: f32 = 0.8;
