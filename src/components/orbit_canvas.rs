use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::AsteroidDetail;
use crate::orbit::{AnimationFrameClock, CanvasRenderer, OrbitAnimator, OrbitScene, PointerDrag};

fn canvas_size(canvas: &web_sys::HtmlCanvasElement) -> (f64, f64) {
    (
        canvas.client_width().max(1) as f64,
        canvas.client_height().max(1) as f64,
    )
}

/// Animated Sun/Earth/asteroid view. The scene is rebuilt whenever
/// `detail` changes and torn down when the component unmounts.
#[component]
pub fn OrbitCanvas(detail: ReadSignal<Option<AsteroidDetail>>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let animator = StoredValue::new_local(OrbitAnimator::new(AnimationFrameClock));
    let observer = StoredValue::new_local(None::<web_sys::ResizeObserver>);
    let drag = StoredValue::new(PointerDrag::default());
    let (playing, set_playing) = signal(true);
    let (labels, set_labels) = signal(true);

    // (Re)build the scene for the current asteroid
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(current) = detail.get() else {
            return;
        };

        let (width, height) = canvas_size(&canvas);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        match CanvasRenderer::from_canvas(&canvas) {
            Ok(renderer) => {
                let mut scene = OrbitScene::build(&current, width, height);
                scene.show_labels = labels.get_untracked();
                animator.try_with_value(|a| a.rebuild(scene, Box::new(renderer)));
            }
            Err(e) => warn!("Orbit view unavailable: {}", e),
        }
    });

    // Keep the drawing surface matched to its container
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if observer.with_value(|o| o.is_some()) {
            return;
        }

        let target = canvas.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
                let (width, height) = canvas_size(&target);
                target.set_width(width as u32);
                target.set_height(height as u32);
                animator.try_with_value(|a| {
                    a.with_scene_mut(|scene| scene.camera.resize(width, height));
                });
            },
        );

        match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(obs) => {
                obs.observe(&canvas);
                observer.set_value(Some(obs));
                callback.forget();
            }
            Err(e) => warn!("ResizeObserver unavailable: {:?}", e),
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|o| {
            if let Some(o) = o {
                o.disconnect();
            }
        });
        animator.try_with_value(|a| a.dispose());
    });

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        drag.update_value(|d| d.begin(x, y));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        if let Some((dx, dy)) = drag.try_update_value(|d| d.move_to(x, y)).flatten() {
            animator.with_value(|a| {
                a.with_scene_mut(|scene| scene.camera.pan(dx, dy));
            });
        }
    };

    let on_pointer_up = move |_| drag.update_value(|d| d.end());

    let on_wheel = move |ev: web_sys::WheelEvent| {
        ev.prevent_default();
        let delta = ev.delta_y();
        animator.with_value(|a| {
            a.with_scene_mut(|scene| scene.camera.zoom(delta));
        });
    };

    let toggle_animation = move |_| {
        let now_playing = animator.with_value(|a| a.toggle());
        set_playing.set(now_playing);
    };

    let reset_view = move |_| {
        animator.with_value(|a| {
            a.with_scene_mut(|scene| scene.camera.reset());
        });
    };

    let toggle_labels = move |_| {
        let show = !labels.get_untracked();
        set_labels.set(show);
        animator.with_value(|a| {
            a.with_scene_mut(|scene| scene.show_labels = show);
        });
    };

    view! {
        <div class="orbit-view">
            <canvas
                id="orbit-canvas"
                class="orbit-canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=move |_| drag.update_value(|d| d.end())
                on:wheel=on_wheel
            ></canvas>
            <div class="orbit-controls">
                <button class="btn btn-secondary" on:click=toggle_animation>
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
                <button class="btn btn-secondary" on:click=reset_view>"Reset View"</button>
                <button class="btn btn-secondary" on:click=toggle_labels>
                    {move || if labels.get() { "Hide Labels" } else { "Show Labels" }}
                </button>
            </div>
        </div>
    }
}
