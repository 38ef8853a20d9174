use crate::state::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }
    html! {
        <div style="position:fixed; right:16px; bottom:16px; display:flex; flex-direction:column; gap:8px; z-index:40; max-width:360px;">
            { for props.toasts.iter().map(|toast| {
                let dismiss = {
                    let cb = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| cb.emit(id))
                };
                html! {
                    <div key={toast.id} style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; gap:10px; align-items:flex-start; box-shadow:0 4px 12px rgba(0,0,0,0.4);">
                        <div style="flex:1;">
                            <div style="font-weight:600; font-size:14px;">{ toast.title.clone() }</div>
                            <div style="font-size:12px; opacity:0.8; margin-top:2px;">{ toast.description.clone() }</div>
                        </div>
                        <button onclick={dismiss} title="Dismiss" style="padding:0 6px; background:none; border:none; color:#e6edf3; cursor:pointer;">{"✕"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
