use super::{
    challenge_list::ChallengeList, settings_modal::SettingsModal, stats_panel::StatsPanel,
    toaster::Toaster,
};
use crate::config::{MultiplierPolicy, ShowConfig};
use crate::state::input::{challenge_from_form, parse_multiplier};
use crate::state::{ControllerCommand, ControllerViewModel, LocalStore, ToastAction, ToastQueue};
use crate::util::format_number;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlInputElement;
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControllerViewProps {
    pub config: ShowConfig,
    pub on_config_change: Callback<ShowConfig>,
}

fn text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[function_component(ControllerView)]
pub fn controller_view(props: &ControllerViewProps) -> Html {
    let controller = {
        let cfg = props.config.clone();
        use_reducer(move || ControllerViewModel::load(LocalStore, &cfg))
    };
    let toasts = use_reducer(ToastQueue::default);
    let name = use_state(String::new);
    let points = use_state(String::new);
    let multiplier_text = use_state(|| format_number(controller.state().multiplier));
    let show_settings = use_state(|| false);

    // Settings may change the multiplier policy while the view is open
    {
        let controller = controller.clone();
        use_effect_with(props.config.multiplier_policy, move |policy| {
            controller.dispatch(ControllerCommand::Configure(*policy));
            || ()
        });
    }

    // Surface each new notice as a toast that expires on its own
    {
        let toasts = toasts.clone();
        let notice = controller.notice().cloned();
        let toast_ms = props.config.toast_ms;
        use_effect_with(notice.as_ref().map(|n| n.seq), move |_| {
            if let Some(notice) = notice {
                let id = notice.seq;
                toasts.dispatch(ToastAction::Push {
                    id,
                    notification: notice.notification,
                });
                let expire = {
                    let toasts = toasts.clone();
                    Closure::once_into_js(move || toasts.dispatch(ToastAction::Dismiss(id)))
                };
                if let Some(win) = web_sys::window() {
                    if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                        expire.unchecked_ref(),
                        toast_ms as i32,
                    ) {
                        log::warn!("toast {id} will not expire: {e:?}");
                    }
                }
            }
            || ()
        });
    }

    // Keep the multiplier field in step with resets
    {
        let multiplier_text = multiplier_text.clone();
        let current = controller.state().multiplier;
        use_effect_with(current.to_bits(), move |_| {
            let shown = parse_multiplier(&multiplier_text, MultiplierPolicy::Propagate)
                .map(f64::to_bits)
                .ok();
            if shown != Some(current.to_bits()) {
                multiplier_text.set(format_number(current));
            }
            || ()
        });
    }

    let add_challenge = {
        let controller = controller.clone();
        let name = name.clone();
        let points = points.clone();
        Callback::from(move |_| match challenge_from_form(&name, &points) {
            Ok(_) => {
                controller.dispatch(ControllerCommand::AddChallenge {
                    name: (*name).clone(),
                    points: (*points).clone(),
                });
                name.set(String::new());
                points.set(String::new());
            }
            // form stays filled in for correction
            Err(e) => log::debug!("challenge not added: {e}"),
        })
    };
    let on_multiplier = {
        let controller = controller.clone();
        let multiplier_text = multiplier_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            multiplier_text.set(raw.clone());
            controller.dispatch(ControllerCommand::SetMultiplier(raw));
        })
    };
    let command = |cmd: ControllerCommand| {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.dispatch(cmd.clone()))
    };
    let on_award = {
        let controller = controller.clone();
        Callback::from(move |index: usize| controller.dispatch(ControllerCommand::AwardChallenge(index)))
    };
    let on_remove = {
        let controller = controller.clone();
        Callback::from(move |index: usize| controller.dispatch(ControllerCommand::RemoveChallenge(index)))
    };
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };

    let state = controller.state();
    let section = "display:flex; flex-direction:column; gap:8px;";
    let field = "padding:6px 8px; background:#0e1116; color:#e6edf3; border:1px solid #30363d; border-radius:6px;";
    let label = "font-size:13px; font-weight:600; opacity:0.85;";

    html! {
        <div style="position:relative; min-height:100%; background:#0e1116; color:#e6edf3; padding:24px; box-sizing:border-box;">
            <div style="max-width:640px; margin:0 auto; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; display:flex; flex-direction:column; gap:18px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h2 style="margin:0; font-size:20px;">{"Game Controller"}</h2>
                    <button onclick={open_settings} style="padding:4px 10px;">{"Settings"}</button>
                </div>
                <StatsPanel points={state.points} round={state.round} multiplier={Some(state.multiplier)} />
                <div style={section}>
                    <label style={label}>{"New Challenge"}</label>
                    <input id="challenge-name" style={field} placeholder="Challenge name"
                        value={(*name).clone()} oninput={text_input(&name)} />
                    <input type="number" style={field} placeholder="Points"
                        value={(*points).clone()} oninput={text_input(&points)} />
                    <button onclick={add_challenge} style="width:100%;">{"+ Add Challenge"}</button>
                </div>
                <div style={section}>
                    <span style={label}>{"Challenges"}</span>
                    <ChallengeList challenges={state.challenges.clone()} on_award={Some(on_award)} on_remove={Some(on_remove)} />
                </div>
                <div style={section}>
                    <span style={label}>{"Game Controls"}</span>
                    <div style="display:flex; gap:8px;">
                        <button onclick={command(ControllerCommand::AdjustPoints(-1))} style="flex:1;">{"- 1 Point"}</button>
                        <button onclick={command(ControllerCommand::AdjustPoints(1))} style="flex:1;">{"+ 1 Point"}</button>
                    </div>
                    <div style="display:flex; gap:8px; align-items:center;">
                        <label style={label}>{"Multiplier:"}</label>
                        <input id="multiplier" type="number" style={format!("{} width:96px;", field)}
                            value={(*multiplier_text).clone()} oninput={on_multiplier} />
                    </div>
                    <button onclick={command(ControllerCommand::NextRound)} style="width:100%;">{"Next Round"}</button>
                    <button onclick={command(ControllerCommand::ResetGame)}
                        style="width:100%; background:#f85149; border:1px solid #b62324; color:#fff;">{"Reset Game"}</button>
                </div>
            </div>
            <Toaster toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />
            <SettingsModal
                show={*show_settings}
                config={props.config.clone()}
                on_close={close_settings}
                on_save={props.on_config_change.clone()}
            />
        </div>
    }
}
