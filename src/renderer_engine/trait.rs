use crate::physic_engine::types::{Color, DrawCommand, Rect};

/// Surface de dessin consommée par le rendu de la simulation.
///
/// Une seule primitive : le rectangle plein. Une surface n'est jamais partagée
/// entre threads, le rendu est séquentiel.
pub trait DrawTarget {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color);
}

/// Enregistre les primitives au lieu de les dessiner (rendu headless, tests).
impl DrawTarget for Vec<DrawCommand> {
    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand { rect, color });
    }
}
