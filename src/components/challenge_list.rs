use crate::model::Challenge;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChallengeListProps {
    pub challenges: Vec<Challenge>,
    /// Row buttons are only drawn when these are set.
    #[prop_or_default]
    pub on_award: Option<Callback<usize>>,
    #[prop_or_default]
    pub on_remove: Option<Callback<usize>>,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(ChallengeList)]
pub fn challenge_list(props: &ChallengeListProps) -> Html {
    if props.challenges.is_empty() {
        return html! { <div style="font-size:12px; opacity:0.6;">{"No challenges yet"}</div> };
    }
    let font = if props.large { "font-size:24px;" } else { "font-size:14px;" };
    html! {
        <div style="display:flex; flex-direction:column; gap:6px;">
            { for props.challenges.iter().enumerate().map(|(index, challenge)| {
                let award = props.on_award.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(index)));
                let remove = props.on_remove.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(index)));
                html! {
                    <div key={index} style={format!("display:flex; justify-content:space-between; align-items:center; gap:8px; {}", font)}>
                        <span>{ format!("{} (+{})", challenge.name, challenge.points) }</span>
                        <div style="display:flex; gap:6px;">
                            { if let Some(cb) = award { html!{ <button onclick={cb} style="padding:2px 8px;">{"Award"}</button> } } else { html!{} } }
                            { if let Some(cb) = remove { html!{ <button onclick={cb} title="Remove" style="padding:2px 8px; background:#f85149; border:1px solid #b62324; color:#fff;">{"✕"}</button> } } else { html!{} } }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
