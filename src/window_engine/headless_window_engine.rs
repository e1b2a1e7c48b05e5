use log::debug;
use std::time::Instant;

use super::r#trait::WindowEngine;
use crate::physic_engine::{Color, DrawCommand, Rect};
use crate::renderer_engine::DrawTarget;

/// Hôte sans affichage : garde les commandes de dessin de la dernière frame
/// présentée et demande à quitter après `max_frames` frames.
#[derive(Debug)]
pub struct HeadlessWindowEngine {
    max_frames: u64,
    frames_presented: u64,
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    title: String,
    start: Instant,
}

impl HeadlessWindowEngine {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frames_presented: 0,
            pending: Vec::new(),
            last_frame: Vec::new(),
            title: String::new(),
            start: Instant::now(),
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Commandes de la dernière frame présentée.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl DrawTarget for HeadlessWindowEngine {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand { rect, color });
    }
}

impl WindowEngine for HeadlessWindowEngine {
    fn poll_quit(&mut self) -> bool {
        self.frames_presented >= self.max_frames
    }

    fn clear(&mut self, _color: Color) {
        self.pending.clear();
    }

    fn present_frame(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.last_frame);
        self.pending.clear();
        self.frames_presented += 1;
    }

    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_millis(&mut self, _ms: u64) {}

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn close(&mut self) {
        debug!(
            "Headless host closed after {} frame(s)",
            self.frames_presented
        );
    }
}
