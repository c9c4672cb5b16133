/// RGB color, cosmetic only
pub type Rgb = [u8; 3];

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle, sized relative to the arena
    pub const PADDLE_WIDTH_RATIO: f32 = 1.0 / 64.0;
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.1875;
    pub const PADDLE_MARGIN_RATIO: f32 = 1.0 / 32.0;
    pub const PADDLE_SPEED_RATIO: f32 = 0.75; // arena heights per second
    pub const PADDLE_BOOST: f32 = 60.0;

    // Ball
    pub const BALL_RADIUS_RATIO: f32 = 1.0 / 64.0; // of arena width
    pub const BALL_SPEED_RATIO: f32 = 0.3125; // arena widths per second
    pub const PADDLE_BOUNCE_BOOST: f32 = 10.0;

    // Boost fades linearly at this rate (units per second per second)
    pub const BOOST_DECAY: f32 = 20.0;

    // Collision
    pub const COLLISION_BUFFER: f32 = 2.0;
    pub const WALL_MARGIN: f32 = 1.0;

    // Pointer input
    pub const FINGER_SENSITIVITY: f32 = 10.0;
    pub const POINTER_WINDOW: usize = 5;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1;
    pub const MIN_FIXED_DT: f32 = 1.0 / 10_000.0;
    pub const MAX_SUBSTEPS: u32 = 1024;

    // Colors
    pub const WHITE: Rgb = [255, 255, 255];
    pub const BLUE: Rgb = [0, 0, 255];
}
