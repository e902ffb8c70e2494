//! Animated orbit visualisation: camera, scene state, frame loop and the
//! canvas renderer that draws it.

pub mod animator;
pub mod camera;
pub mod render;
pub mod scene;

pub use animator::{FrameClock, OrbitAnimator, SceneRenderer};
pub use camera::{Camera, PointerDrag};
pub use render::{AnimationFrameClock, CanvasRenderer};
pub use scene::{OrbitParams, OrbitScene};
