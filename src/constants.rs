/// Frame-updater and interaction tuning constants.
///
/// These constants express intended behavior (rates, amplitudes, clamp
/// limits) and keep magic numbers out of the code, improving readability.
// Hero mesh motion layered on top of the scroll rotation
pub const HERO_SPIN_RATE: f32 = 0.08; // rad/s added to state.rot
pub const HERO_TILT_FREQ: f32 = 0.35;
pub const HERO_TILT_AMPL: f32 = 0.12; // radians

// Particle group drift
pub const DOTS_SPIN_RATE: f32 = 0.03;
pub const DOTS_TILT_FREQ: f32 = 0.12;
pub const DOTS_TILT_AMPL: f32 = 0.02;

// Directional light intensities
pub const KEY_INTENSITY: f32 = 1.35;
pub const FILL_INTENSITY: f32 = 0.55;
pub const RIM_INTENSITY: f32 = 0.35;

// Fill/rim lights wobble on a fixed axis regardless of the active shot
pub const FILL_BASE_X: f32 = -4.0;
pub const FILL_Y: f32 = 1.0;
pub const FILL_Z: f32 = 2.0;
pub const FILL_WOBBLE_FREQ: f32 = 0.35;
pub const FILL_WOBBLE_AMPL: f32 = 0.7;

pub const RIM_X: f32 = -2.0;
pub const RIM_Y: f32 = 2.0;
pub const RIM_BASE_Z: f32 = -5.0;
pub const RIM_WOBBLE_FREQ: f32 = 0.28;
pub const RIM_WOBBLE_AMPL: f32 = 0.7;

// Cursor follower easing per frame
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.18;

// Magnetic hover strengths (px at the element edge)
pub const CARD_MAGNET_STRENGTH: f32 = 12.0;
pub const CTA_MAGNET_STRENGTH: f32 = 10.0;
pub const MAGNET_Y_FACTOR: f32 = 0.8;

// Surface sizing
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Preloader timings (seconds)
pub const PRELOADER_DURATION: f32 = 1.15;
pub const PRELOADER_FADE: f32 = 0.65;

// Deferred scroll-trigger refresh after boot layout settles (ms)
pub const TRIGGER_REFRESH_DELAY_MS: i32 = 250;
