/// Compteur de FPS rafraîchi au plus une fois par seconde.
///
/// FPS = frames présentées depuis le dernier rafraîchissement / secondes écoulées.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start_ms: Option<u64>,
    frames: u32,
    last_fps: Option<u32>,
}

impl FpsCounter {
    const REFRESH_MS: u64 = 1000;

    pub fn new() -> Self {
        Self {
            window_start_ms: None,
            frames: 0,
            last_fps: None,
        }
    }

    /// Compte une frame présentée à `now_ms`.
    ///
    /// Retourne `Some(fps)` quand au moins une seconde s'est écoulée depuis le
    /// dernier rafraîchissement.
    pub fn frame(&mut self, now_ms: u64) -> Option<u32> {
        // La première frame ouvre la fenêtre de mesure sans être comptée
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            return None;
        };
        self.frames += 1;

        let elapsed = now_ms.saturating_sub(start);
        if elapsed < Self::REFRESH_MS {
            return None;
        }

        let fps = (self.frames as u64 * 1000 / elapsed) as u32;
        self.frames = 0;
        self.window_start_ms = Some(now_ms);
        self.last_fps = Some(fps);
        Some(fps)
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
