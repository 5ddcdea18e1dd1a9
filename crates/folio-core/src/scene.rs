//! Decorative particle background: point cloud, camera rig and projection.
//!
//! Only the math lives here; `folio-ui` paints the projected points.

use folio_types::page::Page;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub type Vec3 = [f32; 3];

/// Per-frame lerp factor toward the page framing
pub const PAGE_LERP: f32 = 0.02;
/// Per-frame lerp factor toward the pointer parallax position
pub const POINTER_LERP: f32 = 0.05;
pub const FIELD_EXTENT: f32 = 30.0;
pub const FIELD_COUNT: usize = 3000;

/// Cloud of points scattered through a cube centred on the origin
pub struct ParticleField {
    points: Vec<Vec3>,
}

impl ParticleField {
    /// Same seed, same cloud.
    pub fn new(count: usize, extent: f32, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let half = extent / 2.0;
        let points = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ]
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Slow drift of the whole cloud: (rotation about y, rotation about z)
    pub fn rotation_at(time: f64) -> (f32, f32) {
        ((time * 0.02) as f32, (time * 0.01) as f32)
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(FIELD_COUNT, FIELD_EXTENT, 0x5eed_f01d)
    }
}

/// A point after projection into the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction
    pub depth: f32,
}

/// Perspective camera that always looks at the origin
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub position: Vec3,
    pub fov_deg: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: Page::Home.camera_target(),
            fov_deg: 50.0,
        }
    }

    /// Advance one frame. `pointer` is in normalised device coordinates
    /// ([-1, 1] on both axes, y up) when the pointer is over the page.
    pub fn update(&mut self, page: Page, pointer: Option<[f32; 2]>) {
        if let Some([px, py]) = pointer {
            self.position = lerp3(self.position, [px * 2.0, py, 10.0], POINTER_LERP);
        }
        self.position = lerp3(self.position, page.camera_target(), PAGE_LERP);
    }

    /// Project a world point (after rotating the cloud by `rot_y`, `rot_z`)
    /// into a `width` x `height` viewport. `None` when behind the camera or
    /// outside the view.
    pub fn project(&self, point: Vec3, rot_y: f32, rot_z: f32, width: f32, height: f32) -> Option<Projected> {
        let p = rotate_y(rotate_z(point, rot_z), rot_y);

        let forward = normalize(neg(self.position))?;
        let right = normalize(cross(forward, [0.0, 1.0, 0.0]))?;
        let up = cross(right, forward);

        let rel = sub(p, self.position);
        let depth = dot(rel, forward);
        if depth <= 0.1 {
            return None;
        }

        let f = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        let ndc_x = dot(rel, right) * f / (depth * aspect);
        let ndc_y = dot(rel, up) * f / depth;
        if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
            return None;
        }

        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * width,
            y: (1.0 - ndc_y) * 0.5 * height,
            depth,
        })
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn lerp3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

pub fn distance(a: Vec3, b: Vec3) -> f32 {
    let d = sub(a, b);
    dot(d, d).sqrt()
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn neg(a: Vec3) -> Vec3 {
    [-a[0], -a[1], -a[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(a: Vec3) -> Option<Vec3> {
    let len = dot(a, a).sqrt();
    (len > f32::EPSILON).then(|| [a[0] / len, a[1] / len, a[2] / len])
}

fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [p[0] * c + p[2] * s, p[1], -p[0] * s + p[2] * c]
}

fn rotate_z(p: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    [p[0] * c - p[1] * s, p[0] * s + p[1] * c, p[2]]
}
