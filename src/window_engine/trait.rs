use crate::physic_engine::Color;
use crate::renderer_engine::DrawTarget;

/// Surface d'affichage pilotée par la boucle hôte.
///
/// Toutes les méthodes sont appelées depuis le thread hôte uniquement : la
/// surface n'est jamais partagée avec les workers.
pub trait WindowEngine: DrawTarget {
    /// Traite les évènements en attente. Retourne `true` si l'utilisateur demande à quitter.
    fn poll_quit(&mut self) -> bool;

    /// Efface la frame courante.
    fn clear(&mut self, color: Color);

    /// Présente la frame (swap des buffers).
    fn present_frame(&mut self);

    /// Horloge monotone, en millisecondes.
    fn now_millis(&self) -> u64;

    fn sleep_millis(&mut self, ms: u64);

    fn set_title(&mut self, title: &str);

    /// Libère les ressources d'affichage.
    fn close(&mut self) {}
}
