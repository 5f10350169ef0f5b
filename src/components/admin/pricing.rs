use yew::prelude::*;

#[function_component(DynamicPricing)]
pub fn dynamic_pricing() -> Html {
    html! {
        <div class="screen">
            <div class="screen-heading">
                <h2>{"Dynamic Pricing"}</h2>
                <p>{"Configure automated price modifiers based on demand, time, and special rules."}</p>
            </div>

            <div class="two-column uneven">
                <div class="placeholder-card tall">
                    <p>{"Rule Editor Slot"}</p>
                </div>
                <div class="placeholder-card tall wide">
                    <p>{"Active Rules List"}</p>
                </div>
            </div>
        </div>
    }
}
