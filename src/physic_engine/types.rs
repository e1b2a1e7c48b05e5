pub use glam::Vec2;

/// Couleur RGB 8 bits (l'alpha est toujours opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composantes normalisées `[0, 1]` (pour OpenGL).
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Rectangle plein en coordonnées écran (origine en haut à gauche, y vers le bas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Une primitive de dessin émise pendant le rendu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
}

// ------------------------
// UpdateResult
// ------------------------
/// Événements produits par un tick de simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpdateResult {
    /// Position de la fusée lancée pendant ce tick, s'il y en a une
    pub new_rocket: Option<Vec2>,
    /// Nombre de fusées qui ont explosé pendant ce tick
    pub triggered_explosions: usize,
    /// Nombre de fusées terminées retirées en fin de tick
    pub pruned_rockets: usize,
}
