//! Browser glue: 2D canvas renderer and the animation-frame clock.

use leptos::prelude::{request_animation_frame_with_handle, AnimationFrameRequestHandle};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animator::{FrameClock, SceneRenderer};
use super::camera::{Camera, ScreenPoint};
use super::scene::{Body, BodyKind, OrbitPath, OrbitScene};
use crate::error::NeoWatchError;

/// `requestAnimationFrame` with cancellable handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationFrameClock;

impl FrameClock for AnimationFrameClock {
    type Handle = AnimationFrameRequestHandle;

    fn request_frame(
        &self,
        callback: Box<dyn FnOnce()>,
    ) -> Result<AnimationFrameRequestHandle, NeoWatchError> {
        request_animation_frame_with_handle(callback).map_err(|e| {
            NeoWatchError::Render(format!("requestAnimationFrame failed: {:?}", e))
        })
    }

    fn cancel_frame(&self, handle: AnimationFrameRequestHandle) {
        handle.cancel();
    }
}

pub fn css_color(rgb: u32, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {:.2})",
        (rgb >> 16) & 0xff,
        (rgb >> 8) & 0xff,
        rgb & 0xff,
        alpha.clamp(0.0, 1.0)
    )
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, NeoWatchError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| NeoWatchError::Render(format!("get_context failed: {:?}", e)))?
            .ok_or_else(|| NeoWatchError::Render("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| NeoWatchError::Render("context is not a 2d context".into()))?;
        Ok(Self { ctx })
    }

    fn draw_path(&self, camera: &Camera, path: &OrbitPath) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&css_color(path.color, path.opacity));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        let mut pen_down = false;
        for point in &path.points {
            match camera.project(point) {
                Some(p) if pen_down => ctx.line_to(p.x, p.y),
                Some(p) => {
                    ctx.move_to(p.x, p.y);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();
    }

    fn draw_body(&self, camera: &Camera, body: &Body, at: ScreenPoint, show_labels: bool) {
        let ctx = &self.ctx;
        let r = camera.projected_radius(body.radius, at.depth).max(1.0);

        ctx.set_fill_style_str(&css_color(body.color, body.opacity));
        ctx.begin_path();
        let _ = ctx.arc(at.x, at.y, r, 0.0, std::f64::consts::TAU);
        ctx.fill();

        // Surface marker so self-rotation is visible.
        if matches!(body.kind, BodyKind::Earth | BodyKind::Asteroid) && r > 3.0 {
            let angle = body.rotation.y;
            ctx.set_fill_style_str("rgba(255, 255, 255, 0.35)");
            ctx.begin_path();
            let _ = ctx.arc(
                at.x + angle.cos() * r * 0.55,
                at.y + (angle + body.rotation.x).sin() * r * 0.35,
                r * 0.22,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }

        if show_labels {
            if let Some(label) = &body.label {
                ctx.set_fill_style_str("#e5e7eb");
                ctx.set_font("12px sans-serif");
                let _ = ctx.fill_text(label, at.x + r + 4.0, at.y - r - 2.0);
            }
        }
    }
}

impl SceneRenderer for CanvasRenderer {
    fn render(&mut self, scene: &OrbitScene) {
        let (width, height) = scene.camera.viewport();
        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(0.0, 0.0, width, height);

        for path in scene.orbits() {
            self.draw_path(&scene.camera, path);
        }

        // Painter's algorithm: farthest first.
        let mut visible: Vec<(&Body, ScreenPoint)> = scene
            .bodies()
            .into_iter()
            .filter_map(|b| scene.camera.project(&b.position).map(|p| (b, p)))
            .collect();
        visible.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));

        for (body, at) in visible {
            self.draw_body(&scene.camera, body, at, scene.show_labels);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(0xfdb813, 0.3), "rgba(253, 184, 19, 0.30)");
        assert_eq!(css_color(0x2233ff, 2.0), "rgba(34, 51, 255, 1.00)");
    }
}
