//! Schematic floor plans for the three reconstruction stages.
//!
//! Plans are built once as primitives in a unit square and drawn through a
//! [`Placement`], which handles fitting, rotation and mirroring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use crate::slider::Bounds;
use crate::steps::PlanStage;

pub const WALL: Color = Color::new(0xBE, 0xBE, 0xBE, 255);
pub const DOME: Color = Color::new(0x00, 0x00, 0x00, 255);
pub const PENDENTIVE: Color = Color::new(0xBE, 0xFF, 0xBE, 255);
pub const TURKISH_TRIANGLE: Color = Color::new(0xFF, 0xFF, 0xBE, 255);
pub const TROMP: Color = Color::new(0xBE, 0xBE, 0xFF, 255);
const PAPER: Color = Color::new(255, 255, 255, 255);
const RUBBLE: Color = Color::new(0xD8, 0xD2, 0xC8, 255);
const RIB: Color = Color::new(0x60, 0x60, 0x60, 255);

const WALL_WIDTH: f32 = 0.025;
const FRAGMENT_LENGTH: f32 = 0.07;
const FOOTPRINT_SEED: u64 = 0x5EED_F100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Quad([Vector2; 4]),
    Triangle([Vector2; 3]),
    Disc { center: Vector2, radius: f32 },
    Stroke { from: Vector2, to: Vector2, width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub color: Color,
}

/// Where and how a plan lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub bounds: Bounds,
    /// Clockwise degrees.
    pub rotation: f32,
    pub mirrored: bool,
}

impl Placement {
    pub fn fit(bounds: Bounds) -> Self {
        Self { bounds, rotation: 0.0, mirrored: false }
    }

    fn side(&self) -> f32 {
        self.bounds.width.min(self.bounds.height).max(0.0)
    }

    /// Unit-square point to screen. Mirror first, then rotate about the centre.
    pub fn map(&self, p: Vector2) -> Vector2 {
        let mut x = p.x - 0.5;
        let y = p.y - 0.5;
        if self.mirrored {
            x = -x;
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let (rx, ry) = (x * cos - y * sin, x * sin + y * cos);
        let (cx, cy) = self.bounds.center();
        let side = self.side();
        Vector2::new(cx + rx * side, cy + ry * side)
    }

    pub fn scale(&self, length: f32) -> f32 {
        length * self.side()
    }
}

/// Orders the vertices so raylib's back-face culling keeps the triangle.
pub fn wind(a: Vector2, b: Vector2, c: Vector2) -> [Vector2; 3] {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 { [a, c, b] } else { [a, b, c] }
}

#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub stage: PlanStage,
    primitives: Vec<Primitive>,
}

fn v(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y)
}

fn quad(x0: f32, y0: f32, x1: f32, y1: f32, color: Color) -> Primitive {
    Primitive {
        shape: Shape::Quad([v(x0, y0), v(x1, y0), v(x1, y1), v(x0, y1)]),
        color,
    }
}

fn tri(a: Vector2, b: Vector2, c: Vector2, color: Color) -> Primitive {
    Primitive { shape: Shape::Triangle([a, b, c]), color }
}

fn disc(x: f32, y: f32, radius: f32, color: Color) -> Primitive {
    Primitive { shape: Shape::Disc { center: v(x, y), radius }, color }
}

fn stroke(from: Vector2, to: Vector2, width: f32, color: Color) -> Primitive {
    Primitive { shape: Shape::Stroke { from, to, width }, color }
}

/// Wall runs of the complete building, as segments in the unit square.
const WALLS: [((f32, f32), (f32, f32)); 10] = [
    ((0.08, 0.08), (0.92, 0.08)),
    ((0.92, 0.08), (0.92, 0.92)),
    ((0.92, 0.92), (0.08, 0.92)),
    ((0.08, 0.92), (0.08, 0.08)),
    ((0.36, 0.08), (0.36, 0.42)),
    ((0.36, 0.58), (0.36, 0.92)),
    ((0.64, 0.08), (0.64, 0.42)),
    ((0.64, 0.58), (0.64, 0.92)),
    ((0.08, 0.50), (0.30, 0.50)),
    ((0.70, 0.50), (0.92, 0.50)),
];

/// Square side bays `(x0, y0, x1, y1)`; the central hall sits between them.
const SIDE_BAYS: [(f32, f32, f32, f32); 4] = [
    (0.08, 0.08, 0.36, 0.50),
    (0.64, 0.08, 0.92, 0.50),
    (0.08, 0.50, 0.36, 0.92),
    (0.64, 0.50, 0.92, 0.92),
];

const HALL: (f32, f32, f32, f32) = (0.36, 0.36, 0.64, 0.64);

fn corner_triangles(bay: (f32, f32, f32, f32), size: f32, color: Color, out: &mut Vec<Primitive>) {
    let (x0, y0, x1, y1) = bay;
    out.push(tri(v(x0, y0), v(x0 + size, y0), v(x0, y0 + size), color));
    out.push(tri(v(x1, y0), v(x1, y0 + size), v(x1 - size, y0), color));
    out.push(tri(v(x1, y1), v(x1 - size, y1), v(x1, y1 - size), color));
    out.push(tri(v(x0, y1), v(x0, y1 - size), v(x0 + size, y1), color));
}

impl FloorPlan {
    pub fn build(stage: PlanStage) -> Self {
        let mut primitives = vec![quad(0.0, 0.0, 1.0, 1.0, PAPER)];

        match stage {
            PlanStage::Footprint => Self::ruined_walls(&mut primitives),
            PlanStage::Zoning => {
                Self::structure(&mut primitives);
            }
            PlanStage::Furnishing => {
                Self::structure(&mut primitives);
                Self::details(&mut primitives);
            }
        }

        Self { stage, primitives }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Walls broken into short runs, some of which survived. Seeded so the ruin looks
    /// the same every time it is shown.
    fn ruined_walls(out: &mut Vec<Primitive>) {
        let mut rng = StdRng::seed_from_u64(FOOTPRINT_SEED);
        for (i, &((x0, y0), (x1, y1))) in WALLS.iter().enumerate() {
            let survival = if i < 4 { 0.7 } else { 0.45 };
            let length = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            let pieces = (length / FRAGMENT_LENGTH).ceil().max(1.0) as usize;
            for p in 0..pieces {
                if !rng.random_bool(survival) {
                    out.push(disc(
                        x0 + (x1 - x0) * (p as f32 + 0.5) / pieces as f32 + rng.random_range(-0.02..0.02),
                        y0 + (y1 - y0) * (p as f32 + 0.5) / pieces as f32 + rng.random_range(-0.02..0.02),
                        0.006,
                        RUBBLE,
                    ));
                    continue;
                }
                let t0 = p as f32 / pieces as f32;
                let t1 = (p as f32 + 1.0) / pieces as f32;
                out.push(stroke(
                    v(x0 + (x1 - x0) * t0, y0 + (y1 - y0) * t0),
                    v(x0 + (x1 - x0) * t1, y0 + (y1 - y0) * t1),
                    WALL_WIDTH,
                    WALL,
                ));
            }
        }
    }

    fn structure(out: &mut Vec<Primitive>) {
        for &((x0, y0), (x1, y1)) in WALLS.iter() {
            out.push(stroke(v(x0, y0), v(x1, y1), WALL_WIDTH, WALL));
        }

        // upper bays carry Turkish triangles, lower bays sit on tromps
        for (i, &bay) in SIDE_BAYS.iter().enumerate() {
            let color = if i < 2 { TURKISH_TRIANGLE } else { TROMP };
            corner_triangles(bay, 0.07, color, out);
        }
        corner_triangles(HALL, 0.09, PENDENTIVE, out);

        out.push(disc(0.5, 0.5, 0.12, DOME));
        for &(x0, y0, x1, y1) in SIDE_BAYS.iter() {
            out.push(disc((x0 + x1) * 0.5, (y0 + y1) * 0.5, 0.08, DOME));
        }
    }

    fn details(out: &mut Vec<Primitive>) {
        // dome ribs
        for k in 0..8 {
            let (sin, cos) = (k as f32 * std::f32::consts::FRAC_PI_4).sin_cos();
            out.push(stroke(
                v(0.5 + cos * 0.03, 0.5 + sin * 0.03),
                v(0.5 + cos * 0.11, 0.5 + sin * 0.11),
                0.004,
                RIB,
            ));
        }
        out.push(disc(0.5, 0.5, 0.025, PAPER));

        // window openings in the outer walls
        for k in 0..3 {
            let t = 0.22 + k as f32 * 0.28;
            out.push(quad(t - 0.03, 0.072, t + 0.03, 0.088, PAPER));
            out.push(quad(t - 0.03, 0.912, t + 0.03, 0.928, PAPER));
        }

        // lanterns on the side domes
        for &(x0, y0, x1, y1) in SIDE_BAYS.iter() {
            out.push(disc((x0 + x1) * 0.5, (y0 + y1) * 0.5, 0.015, PAPER));
        }

        // thresholds of the hall doors
        out.push(stroke(v(0.36, 0.42), v(0.36, 0.58), 0.006, RIB));
        out.push(stroke(v(0.64, 0.42), v(0.64, 0.58), 0.006, RIB));
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, placement: &Placement) {
        for primitive in &self.primitives {
            match primitive.shape {
                Shape::Quad([a, b, c, q]) => {
                    let (a, b, c, q) = (placement.map(a), placement.map(b), placement.map(c), placement.map(q));
                    let [t0, t1, t2] = wind(a, b, c);
                    d.draw_triangle(t0, t1, t2, primitive.color);
                    let [t0, t1, t2] = wind(a, c, q);
                    d.draw_triangle(t0, t1, t2, primitive.color);
                }
                Shape::Triangle([a, b, c]) => {
                    let [t0, t1, t2] = wind(placement.map(a), placement.map(b), placement.map(c));
                    d.draw_triangle(t0, t1, t2, primitive.color);
                }
                Shape::Disc { center, radius } => {
                    d.draw_circle_v(placement.map(center), placement.scale(radius), primitive.color);
                }
                Shape::Stroke { from, to, width } => {
                    d.draw_line_ex(placement.map(from), placement.map(to), placement.scale(width), primitive.color);
                }
            }
        }
    }
}

/// The three stage plans, built once at startup.
pub struct FloorPlans {
    plans: [FloorPlan; 3],
}

impl FloorPlans {
    pub fn new() -> Self {
        Self {
            plans: [
                FloorPlan::build(PlanStage::Footprint),
                FloorPlan::build(PlanStage::Zoning),
                FloorPlan::build(PlanStage::Furnishing),
            ],
        }
    }

    pub fn get(&self, stage: PlanStage) -> &FloorPlan {
        match stage {
            PlanStage::Footprint => &self.plans[0],
            PlanStage::Zoning => &self.plans[1],
            PlanStage::Furnishing => &self.plans[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector2, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-3 && (a.y - y).abs() < 1e-3
    }

    #[test]
    fn identity_fits_square_in_center() {
        let p = Placement::fit(Bounds::new(0.0, 0.0, 400.0, 200.0));
        assert!(close(p.map(v(0.0, 0.0)), 100.0, 0.0));
        assert!(close(p.map(v(1.0, 1.0)), 300.0, 200.0));
        assert_eq!(p.scale(0.5), 100.0);
    }

    #[test]
    fn rotation_is_clockwise_and_mirror_flips_x() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let rotated = Placement { bounds, rotation: 90.0, mirrored: false };
        assert!(close(rotated.map(v(0.0, 0.0)), 100.0, 0.0));

        let mirrored = Placement { bounds, rotation: 0.0, mirrored: true };
        assert!(close(mirrored.map(v(0.0, 0.0)), 100.0, 0.0));
        assert!(close(mirrored.map(v(0.0, 1.0)), 100.0, 100.0));

        let full_turn = Placement { bounds, rotation: 360.0, mirrored: false };
        assert!(close(full_turn.map(v(0.2, 0.7)), 20.0, 70.0));
    }

    #[test]
    fn winding_survives_mirroring() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        for mirrored in [false, true] {
            for rotation in [0.0, 90.0, 180.0, 270.0] {
                let p = Placement { bounds, rotation, mirrored };
                let [a, b, c] = wind(p.map(v(0.1, 0.1)), p.map(v(0.9, 0.1)), p.map(v(0.1, 0.9)));
                let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
                assert!(cross <= 0.0);
            }
        }
    }

    #[test]
    fn footprint_is_reproducible_and_has_no_domes() {
        let a = FloorPlan::build(PlanStage::Footprint);
        let b = FloorPlan::build(PlanStage::Footprint);
        assert_eq!(a.primitives(), b.primitives());
        assert!(!a.primitives().iter().any(|p| p.color == DOME));
    }

    #[test]
    fn later_stages_add_detail() {
        let zoning = FloorPlan::build(PlanStage::Zoning);
        let furnishing = FloorPlan::build(PlanStage::Furnishing);
        assert!(zoning.primitives().iter().any(|p| p.color == DOME));
        assert!(zoning.primitives().iter().any(|p| p.color == PENDENTIVE));
        assert!(furnishing.primitives().len() > zoning.primitives().len());
        assert_eq!(&furnishing.primitives()[..zoning.primitives().len()], zoning.primitives());
    }
}
