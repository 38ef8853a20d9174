use crate::config::{MultiplierPolicy, ShowConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: ShowConfig,
    pub on_close: Callback<()>,
    pub on_save: Callback<ShowConfig>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    // every toggle saves immediately
    let save_with = |edit: fn(&mut ShowConfig)| {
        let cb = props.on_save.clone();
        let mut next = props.config.clone();
        edit(&mut next);
        Callback::from(move |_: MouseEvent| cb.emit(next.clone()))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_policy_cb = save_with(|c| {
        c.multiplier_policy = match c.multiplier_policy {
            MultiplierPolicy::Reject => MultiplierPolicy::Propagate,
            MultiplierPolicy::Propagate => MultiplierPolicy::Reject,
        }
    });
    let toggle_celebrate_cb = save_with(|c| c.celebrate = !c.celebrate);
    let toggle_debug_cb = save_with(|c| {
        c.log_level = if c.log_level.eq_ignore_ascii_case("debug") {
            "info".to_string()
        } else {
            "debug".to_string()
        }
    });
    let restore_cb = {
        let cb = props.on_save.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Restore all settings to their defaults?")
                    .unwrap_or(false)
                {
                    cb.emit(ShowConfig::default());
                }
            } else {
                cb.emit(ShowConfig::default());
            }
        })
    };

    let cfg = &props.config;
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.multiplier_policy == MultiplierPolicy::Reject} onclick={toggle_policy_cb} />
                    <span>{"Ignore multipliers that are not numbers"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.celebrate} onclick={toggle_celebrate_cb} />
                    <span>{"Confetti on score increase"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={cfg.log_level.eq_ignore_ascii_case("debug")} onclick={toggle_debug_cb} />
                    <span>{"Verbose console logging"}</span>
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={restore_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">
                { format!("Display refreshes every {} ms; celebrations last {} ms.", cfg.poll_interval_ms, cfg.celebration_ms) }
            </div>
        </div>
    </div>}
}
