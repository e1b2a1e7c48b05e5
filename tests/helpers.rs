#![allow(dead_code)]

use fireworks_parallel::physic_engine::{
    Color, DrawCommand, PhysicConfig, PhysicConfigBuilder, Rect, UpdateResult,
};
use fireworks_parallel::{DrawTarget, PhysicEngine, Schedule, WindowEngine, WorkerPool};
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn chunk(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

pub fn pool(workers: usize) -> WorkerPool {
    WorkerPool::new(NonZeroUsize::new(workers).unwrap()).unwrap()
}

/// Configuration reproductible : graine et nombre de workers fixés.
pub fn seeded_config(workers: usize, schedule: Schedule, chunk_size: usize) -> PhysicConfig {
    PhysicConfigBuilder::default()
        .seed(Some(2024))
        .workers(Some(workers))
        .schedule(schedule)
        .chunk_size(chunk(chunk_size))
        .build()
        .unwrap()
}

/// Moteur physique factice : journalise les appels et dessine `rects_per_frame` rectangles.
pub struct TestPhysic {
    pub log: CallLog,
    pub rects_per_frame: usize,
    pub ticks: u64,
    config: PhysicConfig,
}

impl TestPhysic {
    pub fn new(log: CallLog, rects_per_frame: usize) -> Self {
        Self {
            log,
            rects_per_frame,
            ticks: 0,
            config: PhysicConfig::default(),
        }
    }
}

impl PhysicEngine for TestPhysic {
    fn tick(&mut self) -> UpdateResult {
        self.ticks += 1;
        self.log.borrow_mut().push("physic.tick".into());
        UpdateResult::default()
    }

    fn render(&self, target: &mut dyn DrawTarget) -> usize {
        self.log.borrow_mut().push("physic.render".into());
        for i in 0..self.rects_per_frame {
            target.draw_filled_rect(Rect::new(i as i32, 0, 1, 1), Color::WHITE);
        }
        self.rects_per_frame
    }

    fn rockets_count(&self) -> usize {
        0
    }

    fn particles_count(&self) -> usize {
        0
    }

    fn frames(&self) -> u64 {
        self.ticks
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("physic.close".into());
    }
}

/// Fenêtre factice : horloge simulée (avancée par `sleep_millis`), sortie après N frames.
pub struct TestWindow {
    pub log: CallLog,
    pub quit_after: u64,
    pub presented: u64,
    pub clock_ms: u64,
    pub titles: Vec<String>,
    pub drawn: Vec<DrawCommand>,
}

impl TestWindow {
    pub fn new(log: CallLog, quit_after: u64) -> Self {
        Self {
            log,
            quit_after,
            presented: 0,
            clock_ms: 0,
            titles: Vec::new(),
            drawn: Vec::new(),
        }
    }
}

impl DrawTarget for TestWindow {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.drawn.push(DrawCommand { rect, color });
    }
}

impl WindowEngine for TestWindow {
    fn poll_quit(&mut self) -> bool {
        self.log.borrow_mut().push("window.poll_quit".into());
        self.presented >= self.quit_after
    }

    fn clear(&mut self, _color: Color) {
        self.log.borrow_mut().push("window.clear".into());
        self.drawn.clear();
    }

    fn present_frame(&mut self) {
        self.log.borrow_mut().push("window.present".into());
        self.presented += 1;
    }

    fn now_millis(&self) -> u64 {
        self.clock_ms
    }

    fn sleep_millis(&mut self, ms: u64) {
        self.log.borrow_mut().push(format!("window.sleep({ms})"));
        self.clock_ms += ms;
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("window.close".into());
    }
}
