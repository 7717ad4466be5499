// Runtime configuration
pub const SEED_ENV_VAR: &str = "BIO_FX_SEED";
pub const LOG_FILTER: &str = "info,wgpu=error,naga=warn,bevy_bio_fx=debug";
pub const WINDOW_TITLE: &str = "Creative Bio";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Page layout (world units, Y up, origin at window centre)
pub const PROFILE_POSITION: (f32, f32) = (0.0, 230.0);
pub const PROFILE_SIZE: f32 = 120.0;
pub const PROFILE_RING_SIZE: f32 = 150.0;
pub const NAME_OFFSET: f32 = -100.0;   // Below the profile centre
pub const BIO_OFFSET: f32 = -135.0;
pub const LOCATION_OFFSET: f32 = -160.0;
pub const LINK_COUNT: usize = 4;
pub const LINK_FIRST_Y: f32 = -10.0;
pub const LINK_SPACING: f32 = 70.0;
pub const LINK_SIZE: (f32, f32) = (340.0, 56.0);
pub const LINK_ICON_SIZE: f32 = 28.0;
pub const LINK_ICON_X: f32 = -135.0;
pub const LINK_TITLE_X: f32 = -10.0;
pub const FOOTER_Y: f32 = -340.0;

// Z layers
pub const Z_BACKGROUND: f32 = -20.0;
pub const Z_ORBS: f32 = -10.0;
pub const Z_EMITTER: f32 = 50.0;
pub const Z_CURSOR: f32 = 60.0;

// Floating orbs
pub const ORB_COUNT: usize = 8;
pub const ORB_SIZE_MIN: f32 = 20.0;
pub const ORB_SIZE_MAX: f32 = 80.0;
pub const ORB_DRIFT: f32 = 200.0;          // Max drift from home on each axis
pub const ORB_DRIFT_SECS: (f32, f32) = (15.0, 25.0);
pub const ORB_PULSE_SCALE: (f32, f32) = (0.5, 1.5);
pub const ORB_PULSE_SECS: (f32, f32) = (3.0, 6.0);

// Profile halo
pub const HALO_COUNT: usize = 12;
pub const HALO_RINGS: usize = 2;
pub const HALO_RADIUS: f32 = 80.0;
pub const HALO_DOT_SIZE: f32 = 6.0;
pub const HALO_PULSE_SCALE: (f32, f32) = (0.5, 1.5);
pub const HALO_PULSE_SECS: (f32, f32) = (1.0, 2.0);
pub const HALO_PULSE_STAGGER: f32 = 0.1;
pub const HALO_SPIN_SECS: f32 = 10.0;
pub const HALO_BURST_STAGGER: f32 = 0.05;

// Cursor trail
pub const CURSOR_DOT_COUNT: usize = 5;
pub const CURSOR_DOT_SIZE: f32 = 8.0;
pub const CURSOR_LAG_BASE: f32 = 0.3;
pub const CURSOR_LAG_STEP: f32 = 0.1;
pub const CURSOR_FADE_STEP: f32 = 0.2;
pub const CURSOR_SHRINK_STEP: f32 = 0.15;

// Fireworks (profile click)
pub const FIREWORK_COUNT: usize = 12;
pub const FIREWORK_RADIUS: (f32, f32) = (50.0, 200.0);
pub const FIREWORK_DURATION_MS: u32 = 1000;
pub const FIREWORK_TERMINAL_SCALE: f32 = 0.5;
pub const FIREWORK_SIZE: f32 = 6.0;

// Easter egg
pub const EASTER_EGG_CLICKS: u32 = 10;
pub const EXPLOSION_COUNT: usize = 20;
pub const EXPLOSION_SPREAD: f32 = 200.0;
pub const EXPLOSION_DURATION_MS: u32 = 1000;
pub const EXPLOSION_SIZE: f32 = 4.0;

// Easing curves by name, parsed where the tweens are built
pub const EASE_STEADY: &str = "none";
pub const EASE_DRIFT: &str = "sine.inOut";
pub const EASE_SMOOTH: &str = "power2.out";
pub const EASE_ENTRANCE: &str = "power3.out";
pub const EASE_POP: &str = "back.out(1.7)";
pub const EASE_PROFILE_ENTRANCE: &str = "elastic.out(1, 0.5)";
pub const EASE_EASTER_EGG: &str = "elastic.out(1, 0.3)";
pub const EASE_FIREWORK: &str = "ease-out";

// Parallax
pub const PARALLAX_FACTOR: f32 = 0.5;
pub const PARALLAX_TWEEN_SECS: f32 = 0.1;
pub const SCROLL_LINE_PIXELS: f32 = 40.0;
pub const SCROLL_MAX: f32 = 2000.0;

// Background glow cycling
pub const GLOW_COUNT: usize = 3;
pub const GLOW_RADIUS: f32 = 320.0;
pub const GLOW_ALPHA: f32 = 0.25;
pub const GLOW_FIRST_DELAY: f32 = 2.0;
pub const GLOW_CYCLE_SECS: f32 = 5.0;
pub const GLOW_PERCENT_RANGE: (f32, f32) = (10.0, 90.0);
