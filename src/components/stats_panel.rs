use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub points: f64,
    pub round: u64,
    /// Hidden on the audience view.
    #[prop_or_default]
    pub multiplier: Option<f64>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"★"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Points"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_number(props.points) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⚑"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Round"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ props.round }</span>
            </div>
            { if let Some(m) = props.multiplier {
                html! {
                    <div style={row_style}>
                        <span style={format!("{} color:#f0883e;", icon_style)}>{"×"}</span>
                        <span style={format!("{} color:#f0883e;", label_style)}>{"Multiplier"}</span>
                        <span style={format!("{} color:#f0883e;", value_style)}>{ format!("{}x", format_number(m)) }</span>
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}
