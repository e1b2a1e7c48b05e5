use crossbeam::atomic::AtomicCell;
use crossbeam::utils::CachePadded;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::error::FireworksError;
use crate::parallel::schedule::{Schedule, SchedulePlan};

/// Pool de workers partagé par toutes les régions parallèles (fork-join).
///
/// # Rôle
/// Les threads sont créés une seule fois, au démarrage, puis réutilisés à chaque
/// frame. Le thread appelant fait partie de l'équipe (lane 0) : un pool de
/// `workers` lanes ne lance donc que `workers - 1` threads rayon.
///
/// # Régions imbriquées
/// Chaque région est un `in_place_scope` rayon. Un worker qui attend la fin d'une
/// région imbriquée vole du travail au lieu de dormir : une fusée mise à jour par
/// un worker peut lancer sa propre explosion parallèle sur le même pool.
pub struct WorkerPool {
    workers: usize,
    /// `None` avec une seule lane : tout s'exécute sur le thread appelant
    pool: Option<ThreadPool>,
}

impl WorkerPool {
    /// Crée un pool de `workers` lanes (le thread appelant compris).
    pub fn new(workers: NonZeroUsize) -> Result<Self, FireworksError> {
        let pool = match workers.get() - 1 {
            0 => None,
            threads => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("fireworks-worker-{}", i + 1))
                    .build()
                    .map_err(|e| {
                        FireworksError::ResourceInit(format!("cannot build worker pool: {e}"))
                    })?,
            ),
        };

        debug!("🧵 WorkerPool started with {} lanes", workers);

        Ok(Self {
            workers: workers.get(),
            pool,
        })
    }

    /// Pool dimensionné sur la concurrence matérielle disponible.
    pub fn with_available_parallelism() -> Result<Self, FireworksError> {
        Self::new(thread::available_parallelism().unwrap_or(NonZeroUsize::MIN))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Exécute `work(i)` exactement une fois pour chaque `i` de `[0, count)`.
    ///
    /// Retourne une fois que toutes les unités sont terminées. Si une unité panique,
    /// la région va quand même jusqu'au join, puis la panique est relancée ici.
    pub fn distribute<F>(&self, count: usize, chunk_size: NonZeroUsize, schedule: Schedule, work: F)
    where
        F: Fn(usize) + Sync,
    {
        let plan = SchedulePlan::new(schedule, count, chunk_size, self.workers);
        self.execute(&plan, &|_, range: Range<usize>| range.for_each(&work));
    }

    /// Variante de `distribute` qui donne à chaque unité un accès exclusif à `items[i]`.
    ///
    /// Chaque bloc du plan devient une tranche `&mut` disjointe, réclamée une seule
    /// fois par la lane qui l'exécute : aucune section critique sur la collection.
    pub fn distribute_mut<T, F>(
        &self,
        items: &mut [T],
        chunk_size: NonZeroUsize,
        schedule: Schedule,
        work: F,
    ) where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        let plan = SchedulePlan::new(schedule, items.len(), chunk_size, self.workers);
        let slots = split_into_blocks(items, plan.blocks());

        self.execute(&plan, &|block, range: Range<usize>| {
            if let Some(slice) = slots[block].take() {
                for (item, index) in slice.iter_mut().zip(range) {
                    work(index, item);
                }
            }
        });
    }

    fn execute(&self, plan: &SchedulePlan, run_block: &(dyn Fn(usize, Range<usize>) + Sync)) {
        let lanes = plan.lanes();
        let pool = match &self.pool {
            Some(pool) if lanes > 1 => pool,
            _ => {
                for (block, range) in plan.blocks().iter().enumerate() {
                    run_block(block, range.clone());
                }
                return;
            }
        };

        let next_block = CachePadded::new(AtomicUsize::new(0));
        let lane_work = |lane: usize| match plan.schedule() {
            Schedule::Static => {
                for block in plan.static_assignment(lane) {
                    run_block(block, plan.blocks()[block].clone());
                }
            }
            Schedule::Dynamic | Schedule::Guided => loop {
                let block = next_block.fetch_add(1, Ordering::Relaxed);
                match plan.blocks().get(block) {
                    Some(range) => run_block(block, range.clone()),
                    None => break,
                }
            },
        };

        // lanes 1.. sur le pool, lane 0 sur le thread appelant ; le scope joint
        // toutes les lanes et relance une éventuelle panique
        let lane_work = &lane_work;
        pool.in_place_scope(|scope| {
            for lane in 1..lanes {
                scope.spawn(move |_| lane_work(lane));
            }
            lane_work(0);
        });
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        debug!("🧵 WorkerPool stopped");
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers)
            .field(
                "threads",
                &self.pool.as_ref().map_or(0, ThreadPool::current_num_threads),
            )
            .finish()
    }
}

/// Découpe `items` selon les blocs (contigus, ordonnés) du plan.
fn split_into_blocks<'a, T>(
    mut items: &'a mut [T],
    blocks: &[Range<usize>],
) -> Vec<AtomicCell<Option<&'a mut [T]>>> {
    blocks
        .iter()
        .map(|range| {
            let (head, tail) = std::mem::take(&mut items).split_at_mut(range.len());
            items = tail;
            AtomicCell::new(Some(head))
        })
        .collect()
}
