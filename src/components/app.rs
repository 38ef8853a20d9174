use super::{controller_view::ControllerView, display_view::DisplayView};
use crate::config::ShowConfig;
use crate::state::LocalStore;
use crate::util::init_logging;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

/// Which surface this window shows, picked from the URL hash so the
/// controller and the audience display can run in separate windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Controller,
    Display,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "controller" => Route::Controller,
            "display" => Route::Display,
            _ => Route::Dashboard,
        }
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Route::from_hash(&h))
            .unwrap_or(Route::Dashboard)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Controller,
    Display,
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::current);
    let config = use_state(|| ShowConfig::load(&LocalStore));
    let tab = use_state(|| Tab::Controller);

    // Follow hash changes without a reload
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let on_hash = Closure::wrap(Box::new(move || {
                route.set(Route::current());
            }) as Box<dyn FnMut()>);
            if let Some(win) = &window {
                if let Err(e) = win
                    .add_event_listener_with_callback("hashchange", on_hash.as_ref().unchecked_ref())
                {
                    log::warn!("hashchange listener not installed: {e:?}");
                }
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "hashchange",
                        on_hash.as_ref().unchecked_ref(),
                    );
                }
                drop(on_hash);
            }
        });
    }

    let on_config_change = {
        let config = config.clone();
        Callback::from(move |next: ShowConfig| {
            if let Err(e) = next.save(&LocalStore) {
                log::error!("could not save settings: {e}");
            }
            init_logging(next.level_filter());
            log::info!("settings updated");
            config.set(next);
        })
    };

    let controller = html! {
        <ControllerView config={(*config).clone()} on_config_change={on_config_change.clone()} />
    };
    let display = html! { <DisplayView config={(*config).clone()} /> };

    match *route {
        Route::Controller => controller,
        Route::Display => display,
        Route::Dashboard => {
            let tab_style = |active: bool| {
                format!(
                    "flex:1; padding:8px; border:1px solid #30363d; border-radius:6px; background:{}; color:#e6edf3; cursor:pointer;",
                    if active { "#1f6feb" } else { "#161b22" }
                )
            };
            let to_controller = {
                let tab = tab.clone();
                Callback::from(move |_| tab.set(Tab::Controller))
            };
            let to_display = {
                let tab = tab.clone();
                Callback::from(move |_| tab.set(Tab::Display))
            };
            html! {
                <div style="min-height:100vh; background:#0e1116; color:#e6edf3; padding:24px; box-sizing:border-box;">
                    <div style="max-width:1100px; margin:0 auto; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
                        <h1 style="margin:0 0 12px 0; font-size:26px;">{"Game Show Dashboard"}</h1>
                        <div style="display:flex; gap:8px; margin-bottom:12px;">
                            <button onclick={to_controller} style={tab_style(*tab == Tab::Controller)}>{"Controller"}</button>
                            <button onclick={to_display} style={tab_style(*tab == Tab::Display)}>{"Display"}</button>
                        </div>
                        <div style="position:relative; min-height:480px;">
                            { match *tab { Tab::Controller => controller, Tab::Display => display } }
                        </div>
                        <div style="margin-top:10px; font-size:11px; opacity:0.6;">
                            {"Open #/controller and #/display in separate windows to run them side by side."}
                        </div>
                    </div>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_selects_route() {
        assert_eq!(Route::from_hash("#/controller"), Route::Controller);
        assert_eq!(Route::from_hash("#display"), Route::Display);
        assert_eq!(Route::from_hash("#/display/"), Route::Display);
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/elsewhere"), Route::Dashboard);
    }
}
