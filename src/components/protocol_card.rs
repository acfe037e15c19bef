use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProtocolCardProps {
    pub step: usize,
    pub title: AttrValue,
    pub body: AttrValue,
    pub points: Vec<AttrValue>,
}

/// One full-height card of the "how we work" stack. Scroll motion pins and
/// restyles it through the `protocol-card` class.
#[function_component(ProtocolCard)]
pub fn protocol_card(props: &ProtocolCardProps) -> Html {
    html! {
        <article class="protocol-card">
            <div class="protocol-inner">
                <span class="protocol-step">{ format!("{:02}", props.step) }</span>
                <h3>{ props.title.clone() }</h3>
                <p>{ props.body.clone() }</p>
                <ul class="protocol-points">
                    { for props.points.iter().map(|point| html! { <li>{ point.clone() }</li> }) }
                </ul>
            </div>
        </article>
    }
}
