use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::UpdateResult;
use crate::renderer_engine::DrawTarget;

/// 🔧 Trait `PhysicEngine`
///
/// Interface consommée par la boucle hôte (`Simulator`) : un tick de simulation,
/// puis un rendu séquentiel vers une surface de dessin.
///
/// La boucle garantit qu'un rendu n'est demandé qu'après la fin complète du tick
/// (mise à jour + nettoyage), et qu'aucun tick ne démarre avant que le rendu du
/// précédent ait été émis.
pub trait PhysicEngine {
    /// Fait avancer la simulation d'un tick.
    fn tick(&mut self) -> UpdateResult;

    /// Dessine l'état courant. Retourne le nombre de rectangles émis.
    fn render(&self, target: &mut dyn DrawTarget) -> usize;

    fn rockets_count(&self) -> usize;

    fn particles_count(&self) -> usize;

    /// Nombre de ticks exécutés depuis la création.
    fn frames(&self) -> u64;

    fn get_config(&self) -> &PhysicConfig;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}
