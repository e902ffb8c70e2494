//! Frame loop for the orbit view.
//!
//! The animator owns the current scene and at most one pending frame
//! request. Every teardown path cancels the pending frame before the scene
//! is released, so no scheduled frame can observe a disposed scene.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use super::scene::OrbitScene;
use crate::error::NeoWatchError;

/// Source of display-frame callbacks with explicit cancellation.
pub trait FrameClock {
    type Handle: Copy;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<Self::Handle, NeoWatchError>;

    fn cancel_frame(&self, handle: Self::Handle);
}

/// Draws a scene onto some surface.
pub trait SceneRenderer {
    fn render(&mut self, scene: &OrbitScene);
}

struct AnimatorState<H> {
    scene: Option<OrbitScene>,
    renderer: Option<Box<dyn SceneRenderer>>,
    playing: bool,
    pending: Option<H>,
    frames: u64,
}

pub struct OrbitAnimator<C: FrameClock + 'static> {
    clock: Rc<C>,
    state: Rc<RefCell<AnimatorState<C::Handle>>>,
}

impl<C: FrameClock + 'static> Clone for OrbitAnimator<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Rc::clone(&self.clock),
            state: Rc::clone(&self.state),
        }
    }
}

impl<C: FrameClock + 'static> OrbitAnimator<C> {
    /// Create an idle animator. It starts in the playing state, so the
    /// first scene handed to [`rebuild`](Self::rebuild) begins animating.
    pub fn new(clock: C) -> Self {
        Self {
            clock: Rc::new(clock),
            state: Rc::new(RefCell::new(AnimatorState {
                scene: None,
                renderer: None,
                playing: true,
                pending: None,
                frames: 0,
            })),
        }
    }

    /// Replace the current scene. The previous scene is fully disposed first.
    pub fn rebuild(&self, scene: OrbitScene, renderer: Box<dyn SceneRenderer>) {
        self.dispose();
        let playing = {
            let mut state = self.state.borrow_mut();
            state.scene = Some(scene);
            state.renderer = Some(renderer);
            state.frames = 0;
            state.playing
        };
        info!("Orbit scene rebuilt (playing={})", playing);
        if playing {
            self.schedule();
        }
    }

    /// Cancel any pending frame, then drop the scene and renderer.
    pub fn dispose(&self) {
        let (handle, had_scene) = {
            let mut state = self.state.borrow_mut();
            (state.pending.take(), state.scene.is_some())
        };
        if let Some(handle) = handle {
            self.clock.cancel_frame(handle);
        }
        let mut state = self.state.borrow_mut();
        state.scene = None;
        state.renderer = None;
        if had_scene {
            debug!("Orbit scene disposed after {} frames", state.frames);
        }
    }

    pub fn play(&self) {
        let resume = {
            let mut state = self.state.borrow_mut();
            state.playing = true;
            state.pending.is_none() && state.scene.is_some()
        };
        if resume {
            info!("Orbit animation resumed");
            self.schedule();
        }
    }

    pub fn pause(&self) {
        let handle = {
            let mut state = self.state.borrow_mut();
            state.playing = false;
            state.pending.take()
        };
        if let Some(handle) = handle {
            self.clock.cancel_frame(handle);
        }
        info!("Orbit animation paused");
    }

    /// Flip play/pause and return the new playing state.
    pub fn toggle(&self) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play();
            true
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    pub fn has_scene(&self) -> bool {
        self.state.borrow().scene.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.state.borrow().frames
    }

    pub fn with_scene<R>(&self, f: impl FnOnce(&OrbitScene) -> R) -> Option<R> {
        self.state.borrow().scene.as_ref().map(f)
    }

    pub fn with_scene_mut<R>(&self, f: impl FnOnce(&mut OrbitScene) -> R) -> Option<R> {
        self.state.borrow_mut().scene.as_mut().map(f)
    }

    fn schedule(&self) {
        if self.state.borrow().pending.is_some() {
            return;
        }
        let weak: Weak<RefCell<AnimatorState<C::Handle>>> = Rc::downgrade(&self.state);
        let clock = Rc::clone(&self.clock);
        let callback = Box::new(move || {
            if let Some(state) = weak.upgrade() {
                OrbitAnimator { clock, state }.on_frame();
            }
        });
        match self.clock.request_frame(callback) {
            Ok(handle) => self.state.borrow_mut().pending = Some(handle),
            Err(e) => warn!("Failed to schedule orbit frame: {}", e),
        }
    }

    fn on_frame(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.pending = None;
            if !state.playing {
                return;
            }
            let AnimatorState {
                scene,
                renderer,
                frames,
                ..
            } = &mut *state;
            let Some(scene) = scene.as_mut() else {
                return;
            };
            scene.advance();
            if let Some(renderer) = renderer.as_mut() {
                renderer.render(scene);
            }
            *frames += 1;
        }
        self.schedule();
    }
}

impl<C: FrameClock + 'static> Drop for OrbitAnimator<C> {
    fn drop(&mut self) {
        // Last handle going away: release the scene and any queued frame.
        if Rc::strong_count(&self.state) == 1 {
            self.dispose();
        }
    }
}
