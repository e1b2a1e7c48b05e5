use itertools::{Itertools, MinMaxResult};
use log::info;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

/// Valeur de métrique typée (soit usize soit f32)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Usize(usize),
    F32(f32),
}

impl MetricValue {
    fn as_f64(self) -> f64 {
        match self {
            MetricValue::Usize(u) => u as f64,
            MetricValue::F32(v) => v as f64,
        }
    }
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Usize(v)
    }
}
impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::F32(v)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Usize(u) => write!(f, "{}", u),
            MetricValue::F32(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Résumé d'une série : moyenne, min, max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Données internes du profiler (buffers circulaires de `max_samples` valeurs)
struct ProfilerInner {
    samples: HashMap<String, VecDeque<f32>>, // durées en ms
    metrics: HashMap<String, VecDeque<MetricValue>>,
    frame_times: VecDeque<f32>,
    max_samples: usize,
}

/// Profiler partagé et thread-safe
#[derive(Clone)]
pub struct Profiler {
    inner: Arc<RwLock<ProfilerInner>>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            inner: Arc::new(RwLock::new(ProfilerInner {
                samples: HashMap::new(),
                metrics: HashMap::new(),
                frame_times: VecDeque::with_capacity(max_samples),
                max_samples,
            })),
        }
    }

    // Un panic pendant une mesure ne doit pas rendre le profiler inutilisable.
    fn read(&self) -> RwLockReadGuard<'_, ProfilerInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProfilerInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard {
        FrameGuard {
            profiler: self.clone(),
            start: Instant::now(),
        }
    }

    /// Enregistre une métrique scalaire typée
    pub fn record_metric<T: Into<MetricValue>>(&self, label: impl Into<String>, value: T) {
        let mut inner = self.write();
        let max_samples = inner.max_samples;
        push_bounded(
            inner.metrics.entry(label.into()).or_default(),
            value.into(),
            max_samples,
        );
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let label = label.into();
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let mut inner = self.write();
        let max_samples = inner.max_samples;
        push_bounded(inner.samples.entry(label).or_default(), dt, max_samples);

        result
    }

    /// FPS moyen sur les frames mesurées
    pub fn fps(&self) -> f32 {
        let inner = self.read();
        if inner.frame_times.is_empty() {
            return 0.0;
        }
        let avg = inner.frame_times.iter().sum::<f32>() / inner.frame_times.len() as f32;
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    pub fn total_frames(&self) -> usize {
        self.read().frame_times.len()
    }

    /// Résumé des temps mesurés (ms)
    pub fn summary(&self) -> HashMap<String, SeriesSummary> {
        let inner = self.read();
        inner
            .samples
            .iter()
            .filter_map(|(k, v)| summarize(v.iter().map(|&x| x as f64)).map(|s| (k.clone(), s)))
            .collect()
    }

    /// Résumé pour une métrique spécifique
    pub fn metric_summary(&self, label: &str) -> Option<SeriesSummary> {
        let inner = self.read();
        inner
            .metrics
            .get(label)
            .and_then(|v| summarize(v.iter().map(|m| m.as_f64())))
    }

    /// Dernière valeur enregistrée pour une métrique
    pub fn last_metric(&self, label: &str) -> Option<MetricValue> {
        self.read().metrics.get(label).and_then(|v| v.back().copied())
    }

    /// Log toutes les mesures vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, s) in self.summary().into_iter().sorted_by(|a, b| a.0.cmp(&b.0)) {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, s.avg, s.min, s.max
            );
        }
        let labels: Vec<String> = self.read().metrics.keys().sorted().cloned().collect();
        for label in labels {
            if let Some(s) = self.metric_summary(&label) {
                info!(
                    target: target,
                    "{label}: avg={:.2}, min={}, max={}", s.avg, s.min, s.max
                );
            }
        }
    }
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, value: T, max: usize) {
    if buffer.len() >= max {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

fn summarize(series: impl Iterator<Item = f64> + Clone) -> Option<SeriesSummary> {
    let (count, sum) = series.clone().fold((0usize, 0.0), |(n, s), x| (n + 1, s + x));
    let (min, max) = match series.minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(x) => (x, x),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    Some(SeriesSummary {
        avg: sum / count as f64,
        min,
        max,
    })
}

/// Mesure globale d'une frame
pub struct FrameGuard {
    profiler: Profiler,
    start: Instant,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.write();
        let max_samples = inner.max_samples;
        push_bounded(&mut inner.frame_times, dt, max_samples);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
// macro module_path!() qui est évaluée au moment de la compilation pour obtenir le module courant.
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}
