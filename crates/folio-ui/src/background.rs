//! Particle background painted behind every page.

use egui::{Color32, Painter, Pos2, Rect};
use folio_core::scene::{CameraRig, ParticleField};
use folio_types::page::Page;
use crate::theme::{BG_PRIMARY, PARTICLE};

pub struct BackgroundScene {
    field: ParticleField,
    rig: CameraRig,
}

impl BackgroundScene {
    pub fn new() -> Self {
        Self {
            field: ParticleField::default(),
            rig: CameraRig::new(),
        }
    }

    /// Advance the camera one frame and paint the field into `rect`.
    pub fn paint(&mut self, painter: &Painter, rect: Rect, page: Page, time: f64, pointer: Option<Pos2>) {
        painter.rect_filled(rect, 0.0, BG_PRIMARY);

        let pointer_ndc = pointer.filter(|p| rect.contains(*p)).map(|p| {
            [
                (p.x - rect.left()) / rect.width() * 2.0 - 1.0,
                1.0 - (p.y - rect.top()) / rect.height() * 2.0,
            ]
        });
        self.rig.update(page, pointer_ndc);

        let (rot_y, rot_z) = ParticleField::rotation_at(time);
        for point in self.field.points() {
            let Some(p) = self.rig.project(*point, rot_y, rot_z, rect.width(), rect.height()) else {
                continue;
            };
            // Nearer points are larger and brighter
            let nearness = (1.0 - p.depth / 40.0).clamp(0.05, 1.0);
            let color = Color32::from_rgba_unmultiplied(
                PARTICLE.r(),
                PARTICLE.g(),
                PARTICLE.b(),
                (nearness * 200.0) as u8,
            );
            let center = Pos2::new(rect.left() + p.x, rect.top() + p.y);
            painter.circle_filled(center, 0.5 + nearness * 1.5, color);
        }
    }
}

impl Default for BackgroundScene {
    fn default() -> Self {
        Self::new()
    }
}
