use yew::prelude::*;

/// Panel de aterrizaje del portal admin. Los datos reales llegarán
/// cuando el backend exponga las métricas agregadas.
#[function_component(ExecutiveOverview)]
pub fn executive_overview() -> Html {
    html! {
        <div class="screen">
            <div class="screen-heading">
                <h2>{"Executive Overview"}</h2>
                <p>{"Performance analytics and operational insights will appear here."}</p>
            </div>

            <div class="kpi-grid">
                { for (1..=4).map(|i| html! {
                    <div class="placeholder-card kpi-slot">
                        <p>{format!("KPI Slot {}", i)}</p>
                    </div>
                }) }
            </div>

            <div class="two-column">
                <div class="placeholder-card tall">
                    <p>{"Revenue Analytics Placeholder"}</p>
                </div>
                <div class="placeholder-card tall">
                    <p>{"Activity Feed Placeholder"}</p>
                </div>
            </div>
        </div>
    }
}
