use super::{challenge_list::ChallengeList, confetti::Confetti};
use crate::config::ShowConfig;
use crate::model::GameState;
use crate::state::{DisplayViewModel, LocalStore};
use crate::util::format_number;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DisplayViewProps {
    pub config: ShowConfig,
}

/// Clears the overlay once the celebration deadline passes, re-arming itself
/// when a later increase pushed the deadline out.
fn schedule_clear(
    vm: Rc<RefCell<DisplayViewModel<LocalStore>>>,
    celebrating: UseStateHandle<bool>,
    delay_ms: f64,
) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let clear = Closure::once_into_js(move || {
        let left = vm.borrow().celebration_remaining(js_sys::Date::now());
        match left {
            Some(ms) => schedule_clear(vm, celebrating, ms),
            None => celebrating.set(false),
        }
    });
    if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.unchecked_ref(),
        delay_ms.ceil() as i32,
    ) {
        log::warn!("celebration will end on the next poll: {e:?}");
    }
}

#[function_component(DisplayView)]
pub fn display_view(props: &DisplayViewProps) -> Html {
    let mirror = use_state_eq(GameState::default);
    let celebrating = use_state_eq(|| false);
    // bumped on every increase so the confetti canvas remounts
    let bursts = use_state_eq(|| 0u64);

    {
        let shown = (*mirror).clone();
        let mirror = mirror.clone();
        let celebrating = celebrating.clone();
        let bursts = bursts.clone();
        let cfg = props.config.clone();
        let deps = (cfg.state_key.clone(), cfg.poll_interval_ms, cfg.celebration_ms);
        use_effect_with(deps, move |_| {
            // a settings change rebuilds the model; carry over what is on screen
            let vm = Rc::new(RefCell::new(
                DisplayViewModel::new(LocalStore, &cfg).with_mirror(shown),
            ));
            let burst_count = Cell::new(*bursts);
            let poll: Rc<dyn Fn()> = Rc::new(move || {
                let now = js_sys::Date::now();
                let (outcome, left) = {
                    let mut model = vm.borrow_mut();
                    let outcome = model.poll(now);
                    if outcome.changed {
                        mirror.set(model.mirror().clone());
                    }
                    (outcome, model.celebration_remaining(now))
                };
                if outcome.celebrate {
                    burst_count.set(burst_count.get() + 1);
                    bursts.set(burst_count.get());
                    if let Some(ms) = left {
                        schedule_clear(vm.clone(), celebrating.clone(), ms);
                    }
                }
                celebrating.set(left.is_some());
            });
            poll();

            let window = web_sys::window();
            let tick = {
                let poll = poll.clone();
                Closure::wrap(Box::new(move || poll()) as Box<dyn FnMut()>)
            };
            let interval_id = window.as_ref().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    cfg.poll_interval_ms as i32,
                )
                .map_err(|e| log::error!("display polling not started: {e:?}"))
                .ok()
            });
            log::debug!("display polling every {} ms", cfg.poll_interval_ms);
            move || {
                if let (Some(win), Some(id)) = (&window, interval_id) {
                    win.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    let state = &*mirror;
    html! {
        <div style="position:relative; min-height:100vh; width:100%; overflow:hidden; color:#fff; font-family:sans-serif; background:linear-gradient(135deg, #3b0764 0%, #312e81 100%); display:flex; flex-direction:column; align-items:center; justify-content:center; gap:28px; padding:32px; box-sizing:border-box;">
            { if *celebrating && props.config.celebrate { html! { <Confetti key={*bursts} /> } } else { html! {} } }
            <div style="font-size:28px; letter-spacing:0.2em; text-transform:uppercase; opacity:0.85;">
                { format!("⚑ Round {}", state.round) }
            </div>
            <div style="display:flex; flex-direction:column; align-items:center;">
                <div style="font-size:20px; opacity:0.7;">{"★ Score"}</div>
                <div style="font-size:120px; font-weight:800; font-variant-numeric:tabular-nums; line-height:1;">
                    { format_number(state.points) }
                </div>
            </div>
            <div style="min-width:360px; max-width:720px; background:rgba(0,0,0,0.25); border-radius:16px; padding:16px 24px;">
                <div style="font-size:18px; opacity:0.7; margin-bottom:8px;">
                    { format!("Challenges ({} points on the board)", state.challenge_total()) }
                </div>
                <ChallengeList challenges={state.challenges.clone()} large={true} />
            </div>
        </div>
    }
}
