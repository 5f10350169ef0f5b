use yew::prelude::*;

#[function_component(UserWalletDirectory)]
pub fn user_wallet_directory() -> Html {
    html! {
        <div class="screen">
            <div class="screen-heading">
                <h2>{"User & Wallet Directory"}</h2>
                <p>{"Player profiles and financial transaction history will be accessible here."}</p>
            </div>

            <div class="two-column uneven">
                <div class="placeholder-card tall wide">
                    <p>{"User Table Placeholder"}</p>
                </div>
                <div class="placeholder-card tall">
                    <p>{"Financial Feed Placeholder"}</p>
                </div>
            </div>
        </div>
    }
}
