use log::{debug, info};
use serde::Deserialize;

use crate::physic_engine::{Color, PhysicEngine, UpdateResult};
use crate::utils::FpsCounter;
use crate::window_engine::WindowEngine;
use crate::{log_metrics_and_fps, profiler::Profiler};

/// Réglages de la boucle hôte (section `[simulator]` du fichier de config).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulatorSettings {
    /// Pause en fin de frame : limite le framerate, rien de plus
    pub frame_delay_ms: u64,
    /// Période des logs de métriques du profiler
    pub log_interval_secs: u64,
    pub window_title: String,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            frame_delay_ms: 10,
            log_interval_secs: 5,
            window_title: "Fireworks".to_string(),
        }
    }
}

/// Boucle hôte : un tick de simulation, puis le rendu, puis la présentation.
pub struct Simulator<P, W>
where
    P: PhysicEngine,
    W: WindowEngine,
{
    physic_engine: P,
    window_engine: W,
    settings: SimulatorSettings,

    profiler: Profiler,
    fps_counter: FpsCounter,
    frames: u64,
    last_log_ms: u64,
    first_frame: bool,
}

impl<P, W> Simulator<P, W>
where
    P: PhysicEngine,
    W: WindowEngine,
{
    pub fn new(physic_engine: P, window_engine: W, settings: SimulatorSettings) -> Self {
        let last_log_ms = window_engine.now_millis();
        Self {
            physic_engine,
            window_engine,
            settings,
            profiler: Profiler::new(200),
            fps_counter: FpsCounter::new(),
            frames: 0,
            last_log_ms,
            first_frame: true,
        }
    }

    /// Enchaîne les frames jusqu'au signal de sortie.
    pub fn run(&mut self) {
        while self.step() {}
        info!("🛑 Quit requested after {} frame(s)", self.frames);
    }

    /// Exécute une frame complète. Retourne `false` si l'hôte a demandé à quitter
    /// (dans ce cas aucune phase n'a été lancée).
    pub fn step(&mut self) -> bool {
        if self.window_engine.poll_quit() {
            return false;
        }

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame(); // RAII: mesure totale de la frame

        let update_result = self
            .profiler
            .profile_block("physic - tick", || self.physic_engine.tick());
        Self::log_update(&update_result);

        // Le rendu ne démarre qu'une fois le tick (mise à jour + nettoyage) terminé
        self.window_engine.clear(Color::BLACK);
        let drawn = self.profiler.profile_block("render frame", || {
            self.physic_engine.render(&mut self.window_engine)
        });
        self.profiler.record_metric("rects drawn", drawn);
        self.profiler
            .record_metric("rockets alive", self.physic_engine.rockets_count());
        self.profiler
            .record_metric("particles alive", self.physic_engine.particles_count());

        self.window_engine.present_frame();
        self.frames += 1;

        let now = self.window_engine.now_millis();
        if let Some(fps) = self.fps_counter.frame(now) {
            self.window_engine.set_title(&format!("FPS: {fps}"));
        }

        // affichage périodique
        if now.saturating_sub(self.last_log_ms) >= self.settings.log_interval_secs * 1000 {
            log_metrics_and_fps!(&self.profiler);
            self.last_log_ms = now;
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        self.window_engine.sleep_millis(self.settings.frame_delay_ms);

        true
    }

    fn log_update(update_result: &UpdateResult) {
        if let Some(pos) = update_result.new_rocket {
            debug!("🚀 Rocket launched at ({:.1}, {:.1})", pos.x, pos.y);
        }
        if update_result.triggered_explosions > 0 {
            debug!(
                "💥 {} explosion(s) triggered",
                update_result.triggered_explosions
            );
        }
    }

    pub fn close(&mut self) {
        self.physic_engine.close();
        self.window_engine.close();
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn settings(&self) -> &SimulatorSettings {
        &self.settings
    }
}
