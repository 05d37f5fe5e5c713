use std::path::Path;

use log::debug;
use raylib::prelude::*;

use crate::decoration::Decorations;
use crate::floor_plan::FloorPlans;
use crate::input::Pointer;
use crate::slider::Bounds;
use crate::steps::{PlanStage, SceneKind};
use crate::texture_loader::Assets;

pub mod architecture;
pub mod card;
pub mod compare;
pub mod dataset;
pub mod evaluation;
pub mod framing;
pub mod gallery;
pub mod limitations;
pub mod model;
pub mod paper;

use architecture::ArchitectureScene;
use compare::CompareScene;
use dataset::DatasetScene;
use evaluation::EvaluationScene;
use framing::FramingScene;
use gallery::GalleryScene;
use limitations::LimitationsScene;
use model::ModelScene;
use paper::PaperScene;

/// What a scene may read and change during one frame.
pub struct UpdateContext<'a> {
    pub pointer: Pointer,
    pub area: Bounds,
    pub decorations: &'a mut Decorations,
    pub document: &'a Path,
}

/// What a scene draws from.
pub struct DrawContext<'a> {
    pub pointer: Pointer,
    pub area: Bounds,
    pub decorations: &'a Decorations,
    pub assets: &'a Assets,
    pub plans: &'a FloorPlans,
}

pub trait Scene {
    fn update(&mut self, dt: f32, ctx: &mut UpdateContext);
    fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext);
}

/// The mounted scene. Dropping it tears down everything the scene holds: running
/// timers, a live slider drag, the viewer handle.
pub enum ActiveScene {
    Framing(FramingScene),
    Dataset(DatasetScene),
    Architecture(ArchitectureScene),
    Model(ModelScene),
    Compare(CompareScene),
    Evaluation(EvaluationScene),
    Gallery(GalleryScene),
    Limitations(LimitationsScene),
    Paper(PaperScene),
}

impl ActiveScene {
    pub fn mount(kind: SceneKind, area: Bounds) -> Self {
        debug!("Mounting {:?} scene", kind);
        match kind {
            SceneKind::Framing => Self::Framing(FramingScene::new(area)),
            SceneKind::Dataset => Self::Dataset(DatasetScene::new()),
            SceneKind::Architecture => Self::Architecture(ArchitectureScene::new()),
            SceneKind::Model => Self::Model(ModelScene),
            SceneKind::Structure => Self::Compare(CompareScene::new(
                "Structure Generation (Step 1)",
                PlanStage::Footprint,
                PlanStage::Zoning,
                ("Incomplete Ruin", "Generated Structure"),
                ("Ruins", "Structure"),
                ["Model: Pix2Pix", "Epochs: 300"],
            )),
            SceneKind::Texture => Self::Compare(CompareScene::new(
                "Texture & Detail (Step 2)",
                PlanStage::Zoning,
                PlanStage::Furnishing,
                ("Structure", "Restored Detail"),
                ("Structure", "Detail"),
                ["Input: Structural Map", "Refinement"],
            )),
            SceneKind::Evaluation => Self::Evaluation(EvaluationScene::new()),
            SceneKind::Gallery => Self::Gallery(GalleryScene::new()),
            SceneKind::Limitations => Self::Limitations(LimitationsScene::new()),
            SceneKind::Paper => Self::Paper(PaperScene::new()),
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut UpdateContext) {
        match self {
            Self::Framing(s) => s.update(dt, ctx),
            Self::Dataset(s) => s.update(dt, ctx),
            Self::Architecture(s) => s.update(dt, ctx),
            Self::Model(s) => s.update(dt, ctx),
            Self::Compare(s) => s.update(dt, ctx),
            Self::Evaluation(s) => s.update(dt, ctx),
            Self::Gallery(s) => s.update(dt, ctx),
            Self::Limitations(s) => s.update(dt, ctx),
            Self::Paper(s) => s.update(dt, ctx),
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, ctx: &DrawContext) {
        match self {
            Self::Framing(s) => s.draw(d, ctx),
            Self::Dataset(s) => s.draw(d, ctx),
            Self::Architecture(s) => s.draw(d, ctx),
            Self::Model(s) => s.draw(d, ctx),
            Self::Compare(s) => s.draw(d, ctx),
            Self::Evaluation(s) => s.draw(d, ctx),
            Self::Gallery(s) => s.draw(d, ctx),
            Self::Limitations(s) => s.draw(d, ctx),
            Self::Paper(s) => s.draw(d, ctx),
        }
    }
}

/// Heading block shared by the figure scenes: optional badge, title, subtitle.
/// Returns the y coordinate below it.
pub(crate) fn heading<D: RaylibDraw>(
    d: &mut D,
    area: Bounds,
    badge: Option<(&str, Color, Color)>,
    title: &str,
    subtitle: &str,
) -> f32 {
    let (cx, _) = area.center();
    let mut y = area.top + 28.0;
    if let Some((label, fill, color)) = badge {
        crate::ui::badge(d, label, cx, y, fill, color);
        y += 44.0;
    }
    crate::ui::text_centered(d, title, cx, y, 34, crate::ui::TEXT);
    y += 48.0;
    if !subtitle.is_empty() {
        let width = 900.0;
        y += crate::ui::paragraph(d, subtitle, cx - width * 0.5, y, width, 18, crate::ui::MUTED);
    }
    y + 16.0
}
