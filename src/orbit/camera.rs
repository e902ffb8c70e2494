//! Perspective camera for the orbit view.
//!
//! Dragging pans the camera position directly (no orbiting) and the view
//! is re-aimed at the origin on every projection. Wheel input dollies
//! along the z axis within fixed bounds.

use nalgebra::{Isometry3, Perspective3, Point3, Vector3};

pub const DEFAULT_POSITION: [f64; 3] = [0.0, 30.0, 50.0];
pub const MIN_Z: f64 = 20.0;
pub const MAX_Z: f64 = 100.0;

const FOV_Y_DEG: f64 = 75.0;
const Z_NEAR: f64 = 0.1;
const Z_FAR: f64 = 1000.0;
const PAN_SPEED: f64 = 0.1;
const ZOOM_SPEED: f64 = 0.05;

/// A projected point in canvas pixels. `depth` is the distance in front of
/// the camera along its view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    width: f64,
    height: f64,
}

impl Camera {
    pub fn new(width: f64, height: f64) -> Self {
        let [x, y, z] = DEFAULT_POSITION;
        Self {
            position: Point3::new(x, y, z),
            target: Point3::origin(),
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f64 {
        (self.width / self.height).max(1e-6)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Shift the camera by a pointer delta in pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.position.x += dx * PAN_SPEED;
        self.position.y -= dy * PAN_SPEED;
        self.target = Point3::origin();
    }

    /// Dolly along z by a wheel delta, clamped to [`MIN_Z`, `MAX_Z`].
    pub fn zoom(&mut self, wheel_delta_y: f64) {
        let z = self.position.z + wheel_delta_y * ZOOM_SPEED;
        self.position.z = z.clamp(MIN_Z, MAX_Z);
    }

    pub fn reset(&mut self) {
        let [x, y, z] = DEFAULT_POSITION;
        self.position = Point3::new(x, y, z);
        self.target = Point3::origin();
    }

    fn view(&self) -> Isometry3<f64> {
        Isometry3::look_at_rh(&self.position, &self.target, &Vector3::y())
    }

    fn projection(&self) -> Perspective3<f64> {
        Perspective3::new(self.aspect(), FOV_Y_DEG.to_radians(), Z_NEAR, Z_FAR)
    }

    /// Project a world point to canvas pixels. Points behind the near plane
    /// or past the far plane are culled.
    pub fn project(&self, world: &Point3<f64>) -> Option<ScreenPoint> {
        let eye = self.view().transform_point(world);
        let depth = -eye.z;
        if depth <= Z_NEAR || depth >= Z_FAR {
            return None;
        }
        let ndc = self.projection().project_point(&eye);
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            depth,
        })
    }

    /// On-screen radius in pixels of a sphere at the given depth.
    pub fn projected_radius(&self, radius: f64, depth: f64) -> f64 {
        if depth <= 0.0 {
            return 0.0;
        }
        let focal = (self.height * 0.5) / (FOV_Y_DEG.to_radians() * 0.5).tan();
        radius * focal / depth
    }
}

/// Pointer drag tracking for the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    last: Option<(f64, f64)>,
}

impl PointerDrag {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Returns the delta since the previous pointer position while dragging.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (px, py) = self.last?;
        self.last = Some((x, y));
        Some((x - px, y - py))
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_near_center() {
        let cam = Camera::new(800.0, 600.0);
        let p = cam.project(&Point3::origin()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-6, "x = {}", p.x);
        assert!((p.y - 300.0).abs() < 1e-6, "y = {}", p.y);
        let expected_depth = (30.0f64.powi(2) + 50.0f64.powi(2)).sqrt();
        assert!((p.depth - expected_depth).abs() < 1e-9);
    }

    #[test]
    fn test_point_behind_camera_is_culled() {
        let cam = Camera::new(800.0, 600.0);
        assert!(cam.project(&Point3::new(0.0, 60.0, 100.0)).is_none());
    }

    #[test]
    fn test_zoom_clamps() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.zoom(10_000.0);
        assert_eq!(cam.position.z, MAX_Z);
        cam.zoom(-10_000.0);
        assert_eq!(cam.position.z, MIN_Z);
        cam.zoom(100.0);
        assert!((cam.position.z - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_is_positional() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.pan(10.0, 20.0);
        assert!((cam.position.x - 1.0).abs() < 1e-9);
        assert!((cam.position.y - 28.0).abs() < 1e-9);
        assert_eq!(cam.position.z, 50.0);
        assert_eq!(cam.target, Point3::origin());
        // Origin stays centered after re-aim.
        let p = cam.project(&Point3::origin()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-6);
        assert!((p.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_restores_default_pose() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.pan(-40.0, 15.0);
        cam.zoom(300.0);
        cam.reset();
        assert_eq!(cam.position, Point3::new(0.0, 30.0, 50.0));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.resize(1000.0, 500.0);
        assert_eq!(cam.viewport(), (1000.0, 500.0));
        assert!((cam.aspect() - 2.0).abs() < 1e-12);
        cam.resize(0.0, 0.0);
        assert_eq!(cam.viewport(), (1.0, 1.0));
    }

    #[test]
    fn test_projected_radius_shrinks_with_depth() {
        let cam = Camera::new(800.0, 600.0);
        let near = cam.projected_radius(2.0, 20.0);
        let far = cam.projected_radius(2.0, 80.0);
        assert!(near > far);
        assert!((near / far - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_drag_deltas() {
        let mut drag = PointerDrag::default();
        assert_eq!(drag.move_to(5.0, 5.0), None);
        drag.begin(10.0, 10.0);
        assert!(drag.is_dragging());
        assert_eq!(drag.move_to(15.0, 7.0), Some((5.0, -3.0)));
        assert_eq!(drag.move_to(16.0, 7.0), Some((1.0, 0.0)));
        drag.end();
        assert_eq!(drag.move_to(20.0, 20.0), None);
    }
}
