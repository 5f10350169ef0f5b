use yew::prelude::*;

#[function_component(ResourceManagement)]
pub fn resource_management() -> Html {
    html! {
        <div class="screen">
            <div class="screen-heading">
                <h2>{"Resource Management"}</h2>
                <p>{"Manage facility inventory, grounds, and court configurations here."}</p>
            </div>

            <div class="placeholder-card hero">
                <div class="placeholder-center">
                    <p>{"Resource Inventory Placeholder"}</p>
                    <span>{"Define and configure your facility's physical assets."}</span>
                </div>
            </div>
        </div>
    }
}
