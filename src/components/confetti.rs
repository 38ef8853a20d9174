use crate::state::confetti::{Particle, burst, step};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

fn draw(ctx: &CanvasRenderingContext2d, w: f64, h: f64, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in particles {
        ctx.save();
        ctx.set_global_alpha(p.opacity());
        ctx.set_fill_style_str(p.color);
        ctx.translate(p.x, p.y).ok();
        ctx.rotate(p.tilt).ok();
        ctx.fill_rect(-5.0, -3.0, 10.0, 6.0);
        ctx.restore();
    }
}

/// Full-window canvas that fires a single burst when mounted. Remount it
/// (e.g. with a new `key`) to fire again.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let ctx = canvas.as_ref().and_then(|c| {
                c.get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|o| o.dyn_into::<CanvasRenderingContext2d>().ok())
            });
            let mut interval_id = None;
            let mut frame = None;
            if let (Some(win), Some(canvas), Some(ctx)) = (&window, canvas, ctx) {
                let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
                let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
                canvas.set_width(w.max(0.0) as u32);
                canvas.set_height(h.max(0.0) as u32);
                let particles = Rc::new(RefCell::new(burst(w, h, js_sys::Math::random)));
                let tick = Closure::wrap(Box::new(move || {
                    let mut ps = particles.borrow_mut();
                    if ps.is_empty() {
                        return;
                    }
                    step(&mut ps);
                    draw(&ctx, w, h, &ps);
                }) as Box<dyn FnMut()>);
                match win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    16,
                ) {
                    Ok(id) => interval_id = Some(id),
                    Err(e) => log::warn!("confetti animation not started: {e:?}"),
                }
                frame = Some(tick);
            }
            move || {
                if let (Some(win), Some(id)) = (&window, interval_id) {
                    win.clear_interval_with_handle(id);
                }
                drop(frame);
            }
        });
    }
    html! { <canvas ref={canvas_ref} style="position:fixed; inset:0; z-index:50; pointer-events:none;" /> }
}
