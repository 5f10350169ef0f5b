use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::NewAdminAccount;

#[derive(Properties, PartialEq)]
pub struct AddAdminDialogProps {
    pub busy: bool,
    pub error: Option<String>,
    pub on_submit: Callback<NewAdminAccount>,
    pub on_cancel: Callback<()>,
}

/// Alta de administrador. La validación es la mínima del backend:
/// nombre, email y nombre de negocio obligatorios.
#[function_component(AddAdminDialog)]
pub fn add_admin_dialog(props: &AddAdminDialogProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let city_ref = use_node_ref();
    let business_name_ref = use_node_ref();
    let business_address_ref = use_node_ref();
    let gst_ref = use_node_ref();
    let local_error = use_state(|| None::<String>);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let city_ref = city_ref.clone();
        let business_name_ref = business_name_ref.clone();
        let business_address_ref = business_address_ref.clone();
        let gst_ref = gst_ref.clone();
        let local_error = local_error.clone();
        let submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value_of = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            let payload = NewAdminAccount {
                name: value_of(&name_ref),
                email: value_of(&email_ref),
                phone: value_of(&phone_ref),
                city: value_of(&city_ref),
                business_name: value_of(&business_name_ref),
                business_address: value_of(&business_address_ref),
                gst_number: value_of(&gst_ref),
            };

            if payload.name.is_empty() || payload.email.is_empty() || payload.business_name.is_empty()
            {
                local_error.set(Some("Please fill in all required fields.".to_string()));
                return;
            }

            local_error.set(None);
            submit.emit(payload);
        })
    };

    let shown_error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <form onsubmit={on_submit}>
                    <header class="dialog-header">
                        <h3>{"Create New Admin"}</h3>
                        <p>{"Enter the details below to register a new administrator to the portal."}</p>
                    </header>

                    <div class="dialog-body two-column">
                        <section class="form-section">
                            <h4>{"Personal Details"}</h4>
                            <div class="form-group">
                                <label for="name">{"Full Name *"}</label>
                                <input type="text" id="name" placeholder="John Doe" ref={name_ref} />
                            </div>
                            <div class="form-group">
                                <label for="email">{"Email Address *"}</label>
                                <input type="email" id="email" placeholder="john@example.com" ref={email_ref} />
                            </div>
                            <div class="form-group">
                                <label for="phone">{"Phone Number"}</label>
                                <input type="tel" id="phone" placeholder="+91 9876543210" ref={phone_ref} />
                            </div>
                        </section>

                        <section class="form-section">
                            <h4>{"Business Details"}</h4>
                            <div class="form-group">
                                <label for="businessName">{"Business Name *"}</label>
                                <input type="text" id="businessName" placeholder="Elite Sports Arena" ref={business_name_ref} />
                            </div>
                            <div class="form-group">
                                <label for="gstNumber">{"GST Number"}</label>
                                <input type="text" id="gstNumber" placeholder="22AAAAA0000A1Z5" ref={gst_ref} />
                            </div>
                            <div class="form-group">
                                <label for="city">{"City"}</label>
                                <input type="text" id="city" placeholder="Mumbai" ref={city_ref} />
                            </div>
                        </section>

                        <div class="form-group span-two">
                            <label for="businessAddress">{"Business Address"}</label>
                            <input
                                type="text"
                                id="businessAddress"
                                placeholder="123 Sport Street, Near City Park"
                                ref={business_address_ref}
                            />
                        </div>

                        if let Some(message) = shown_error {
                            <div class="form-error span-two">{message}</div>
                        }
                    </div>

                    <footer class="dialog-footer">
                        <button
                            type="button"
                            class="btn-outline"
                            disabled={props.busy}
                            onclick={props.on_cancel.reform(|_| ())}
                        >
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={props.busy}>
                            { if props.busy { "Creating..." } else { "Create Admin" } }
                        </button>
                    </footer>
                </form>
            </div>
        </div>
    }
}
