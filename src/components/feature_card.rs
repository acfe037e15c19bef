use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{ props.icon.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.body.clone() }</p>
        </div>
    }
}
