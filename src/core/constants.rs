// Layout, animation and camera tuning constants.
//
// These express intended behavior (durations, clamp limits, card sizes) and
// keep magic numbers out of the code. `SceneConfig::default()` is built from
// them.

// Sphere layout
pub const SPHERE_RADIUS: f32 = 200.0;
pub const SCATTER_EXTENT: f32 = 2000.0; // half-size of the cube items start in

// Transition timing (seconds)
pub const ASSEMBLE_SECS: f64 = 2.0;
pub const TO_FRONT_SECS: f64 = 0.8;
pub const TO_SPHERE_SECS: f64 = 0.6;

// Camera-front pose
pub const FRONT_DISTANCE: f32 = 1200.0; // along the view axis, from the eye
pub const FRONT_SCALE: f32 = 2.0;

// Card footprint in world units (one CSS pixel per unit)
pub const CARD_WIDTH: f32 = 128.0;
pub const CARD_HEIGHT: f32 = 160.0;

// Orbit camera
pub const CAMERA_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 5000.0;
pub const CAMERA_DISTANCE: f32 = 2000.0;
pub const CAMERA_MIN_DISTANCE: f32 = 800.0;
pub const CAMERA_MAX_DISTANCE: f32 = 4000.0;
pub const CAMERA_DAMPING: f32 = 0.05;
pub const CAMERA_ROTATE_SPEED: f32 = 1.0;
pub const CAMERA_ZOOM_SPEED: f32 = 1.0;
pub const CAMERA_ELEVATION_EPS: f32 = 1e-4; // keeps the eye off the poles

// Interaction
pub const DRAG_THRESHOLD_PX: f32 = 4.0; // movement that turns a click into an orbit drag
