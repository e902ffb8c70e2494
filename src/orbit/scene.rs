//! Schematic Sun/Earth/asteroid scene.
//!
//! The static asteroid orbit line is shaped by the miss distance, but the
//! animated asteroid always follows the fixed 25 x 18 ellipse. The two
//! paths only coincide when the distance-derived axes happen to be 25/18.

use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

use super::camera::Camera;
use crate::models::AsteroidDetail;

pub const TIME_STEP: f64 = 0.005;
pub const EARTH_ORBIT_RADIUS: f64 = 20.0;
pub const ASTEROID_PATH_A: f64 = 25.0;
pub const ASTEROID_PATH_B: f64 = 18.0;
pub const ASTEROID_SPEED: f64 = 1.5;
/// Vertical swing of the asteroid path and orbit line.
pub const PATH_TILT: f64 = 2.0;
pub const DEFAULT_DISTANCE_FACTOR: f64 = 20.0;

pub const SUN_COLOR: u32 = 0xfdb813;
pub const EARTH_COLOR: u32 = 0x2233ff;
pub const HAZARD_COLOR: u32 = 0xff4444;
pub const ASTEROID_COLOR: u32 = 0xff6b6b;

const ORBIT_SEGMENTS: usize = 360;
const EARTH_SPIN: f64 = 0.01;
const ASTEROID_SPIN: (f64, f64) = (0.02, 0.03);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    SunGlow,
    Earth,
    Asteroid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub label: Option<String>,
    pub position: Point3<f64>,
    pub radius: f64,
    pub color: u32,
    pub opacity: f64,
    /// Accumulated self-rotation in radians per axis.
    pub rotation: Vector3<f64>,
}

impl Body {
    fn new(kind: BodyKind, label: Option<String>, radius: f64, color: u32, opacity: f64) -> Self {
        Self {
            kind,
            label,
            position: Point3::origin(),
            radius,
            color,
            opacity,
            rotation: Vector3::zeros(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub points: Vec<Point3<f64>>,
    pub color: u32,
    pub opacity: f64,
}

/// Semi-axes of the static asteroid orbit line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub a: f64,
    pub b: f64,
}

impl OrbitParams {
    /// Axes from the miss distance in lunar distances; unknown uses 20 LD.
    pub fn from_miss_distance(miss_distance_lunar: Option<f64>) -> Self {
        let factor = miss_distance_lunar
            .filter(|v| v.is_finite() && *v != 0.0)
            .unwrap_or(DEFAULT_DISTANCE_FACTOR);
        Self {
            a: (25.0 + factor / 10.0).min(40.0),
            b: (18.0 + factor / 15.0).min(30.0),
        }
    }
}

pub fn asteroid_radius(avg_diameter_m: f64) -> f64 {
    if !avg_diameter_m.is_finite() {
        return 0.1;
    }
    (avg_diameter_m / 100.0).clamp(0.1, 2.0)
}

pub fn asteroid_color(hazardous: bool) -> u32 {
    if hazardous {
        HAZARD_COLOR
    } else {
        ASTEROID_COLOR
    }
}

pub fn earth_position(time: f64) -> Point3<f64> {
    Point3::new(
        time.cos() * EARTH_ORBIT_RADIUS,
        0.0,
        time.sin() * EARTH_ORBIT_RADIUS,
    )
}

pub fn asteroid_position(time: f64) -> Point3<f64> {
    let t = time * ASTEROID_SPEED;
    Point3::new(
        t.cos() * ASTEROID_PATH_A,
        t.sin() * PATH_TILT,
        t.sin() * ASTEROID_PATH_B,
    )
}

fn ellipse(a: f64, tilt: f64, b: f64) -> Vec<Point3<f64>> {
    (0..=ORBIT_SEGMENTS)
        .map(|i| {
            let angle = (i as f64) * PI / 180.0;
            Point3::new(angle.cos() * a, angle.sin() * tilt, angle.sin() * b)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitScene {
    pub camera: Camera,
    pub sun: Body,
    pub sun_glow: Body,
    pub earth: Body,
    pub asteroid: Body,
    pub earth_orbit: OrbitPath,
    pub asteroid_orbit: OrbitPath,
    pub orbit_params: OrbitParams,
    /// Animation clock, advanced by [`TIME_STEP`] per rendered frame.
    pub time: f64,
    pub show_labels: bool,
}

impl OrbitScene {
    /// Build a fresh scene for one asteroid. Missing measurements fall back
    /// to default geometry.
    pub fn build(detail: &AsteroidDetail, width: f64, height: f64) -> Self {
        let color = asteroid_color(detail.hazardous);
        let orbit_params = OrbitParams::from_miss_distance(detail.miss_distance_lunar());

        let sun = Body::new(BodyKind::Sun, Some("Sun".into()), 3.0, SUN_COLOR, 1.0);
        let sun_glow = Body::new(BodyKind::SunGlow, None, 3.5, SUN_COLOR, 0.3);

        let mut earth = Body::new(BodyKind::Earth, Some("Earth".into()), 2.0, EARTH_COLOR, 1.0);
        earth.position = Point3::new(EARTH_ORBIT_RADIUS, 0.0, 0.0);

        let mut asteroid = Body::new(
            BodyKind::Asteroid,
            Some(detail.display_name()),
            asteroid_radius(detail.geometry_diameter_m()),
            color,
            1.0,
        );
        asteroid.position = asteroid_position(0.0);

        Self {
            camera: Camera::new(width, height),
            sun,
            sun_glow,
            earth,
            asteroid,
            earth_orbit: OrbitPath {
                points: ellipse(EARTH_ORBIT_RADIUS, 0.0, EARTH_ORBIT_RADIUS),
                color: EARTH_COLOR,
                opacity: 0.3,
            },
            asteroid_orbit: OrbitPath {
                points: ellipse(orbit_params.a, PATH_TILT, orbit_params.b),
                color,
                opacity: 0.5,
            },
            orbit_params,
            time: 0.0,
            show_labels: true,
        }
    }

    /// Step the animation by one frame.
    pub fn advance(&mut self) {
        self.time += TIME_STEP;

        self.earth.position = earth_position(self.time);
        self.earth.rotation.y += EARTH_SPIN;

        self.asteroid.position = asteroid_position(self.time);
        self.asteroid.rotation.x += ASTEROID_SPIN.0;
        self.asteroid.rotation.y += ASTEROID_SPIN.1;
    }

    pub fn bodies(&self) -> [&Body; 4] {
        [&self.sun_glow, &self.sun, &self.earth, &self.asteroid]
    }

    pub fn orbits(&self) -> [&OrbitPath; 2] {
        [&self.earth_orbit, &self.asteroid_orbit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CloseApproach;

    fn detail(min: f64, max: f64, lunar: Option<f64>, hazardous: bool) -> AsteroidDetail {
        AsteroidDetail {
            id: "1".into(),
            name: "Test Rock".into(),
            hazardous,
            diameter_min_m: Some(min),
            diameter_max_m: Some(max),
            close_approach: Some(CloseApproach {
                miss_distance_lunar: lunar,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_radius_clamp() {
        assert_eq!(asteroid_radius(5000.0), 2.0);
        assert_eq!(asteroid_radius(0.0), 0.1);
        assert!((asteroid_radius(150.0) - 1.5).abs() < 1e-12);
        assert_eq!(asteroid_radius(f64::NAN), 0.1);
    }

    #[test]
    fn test_orbit_params_default_distance() {
        let p = OrbitParams::from_miss_distance(None);
        assert!((p.a - 27.0).abs() < 1e-12);
        assert!((p.b - (18.0 + 20.0 / 15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_orbit_params_are_capped() {
        let p = OrbitParams::from_miss_distance(Some(1000.0));
        assert_eq!(p.a, 40.0);
        assert_eq!(p.b, 30.0);
    }

    #[test]
    fn test_build_uses_detail() {
        let scene = OrbitScene::build(&detail(4000.0, 6000.0, Some(50.0), true), 640.0, 480.0);
        assert_eq!(scene.asteroid.radius, 2.0);
        assert_eq!(scene.asteroid.color, HAZARD_COLOR);
        assert_eq!(scene.asteroid_orbit.color, HAZARD_COLOR);
        assert_eq!(scene.asteroid_orbit.points.len(), 361);
        assert_eq!(scene.earth_orbit.points.len(), 361);
        assert!((scene.orbit_params.a - 30.0).abs() < 1e-12);
        assert_eq!(scene.asteroid.label.as_deref(), Some("Test Rock"));
        assert_eq!(scene.time, 0.0);
    }

    #[test]
    fn test_build_with_empty_detail_degrades() {
        let scene = OrbitScene::build(&AsteroidDetail::default(), 640.0, 480.0);
        assert_eq!(scene.asteroid.radius, 0.1);
        assert_eq!(scene.asteroid.color, ASTEROID_COLOR);
        assert_eq!(scene.orbit_params, OrbitParams::from_miss_distance(None));
    }

    #[test]
    fn test_advance_moves_bodies() {
        let mut scene = OrbitScene::build(&detail(100.0, 200.0, Some(3.0), false), 640.0, 480.0);
        for _ in 0..200 {
            scene.advance();
        }
        assert!((scene.time - 1.0).abs() < 1e-9);
        let earth = earth_position(scene.time);
        assert!((scene.earth.position - earth).norm() < 1e-12);
        let r = (scene.earth.position.x.powi(2) + scene.earth.position.z.powi(2)).sqrt();
        assert!((r - EARTH_ORBIT_RADIUS).abs() < 1e-9);
        assert!((scene.asteroid.rotation.y - 200.0 * 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_animated_path_ignores_orbit_params() {
        let mut scene = OrbitScene::build(&detail(100.0, 200.0, Some(150.0), false), 640.0, 480.0);
        scene.advance();
        let t = scene.time * ASTEROID_SPEED;
        assert!((scene.asteroid.position.x - t.cos() * 25.0).abs() < 1e-12);
        assert!((scene.asteroid.position.z - t.sin() * 18.0).abs() < 1e-12);
        assert!(scene.orbit_params.a > 25.0);
    }
}
