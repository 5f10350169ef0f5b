// Alta de recurso dentro de un servicio. Horario 06-22 y slots de una hora
// como valores de partida, que es lo habitual en las instalaciones.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::FacilityService;
use crate::utils::constants::PREDEFINED_ACTIVITIES;

#[derive(Clone, PartialEq)]
pub struct ResourceForm {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub opening_time: String,
    pub closing_time: String,
    pub slot_duration_minutes: u32,
    pub base_price: f64,
    pub activity_codes: Vec<String>,
}

impl Default for ResourceForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            enabled: true,
            opening_time: "06:00:00".to_string(),
            closing_time: "22:00:00".to_string(),
            slot_duration_minutes: 60,
            base_price: 0.0,
            activity_codes: Vec::new(),
        }
    }
}

/// El input type=time devuelve "HH:MM"; el backend espera segundos
fn with_seconds(value: String) -> String {
    if value.len() == 5 {
        format!("{}:00", value)
    } else {
        value
    }
}

#[derive(Properties, PartialEq)]
pub struct AddResourceDialogProps {
    pub service: FacilityService,
    pub busy: bool,
    pub on_save: Callback<ResourceForm>,
    pub on_cancel: Callback<()>,
}

#[function_component(AddResourceDialog)]
pub fn add_resource_dialog(props: &AddResourceDialogProps) -> Html {
    let form = use_state(ResourceForm::default);

    let edit_text = |apply: fn(&mut ResourceForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = area.value();
            form.set(next);
        })
    };

    let on_duration = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.slot_duration_minutes = input.value().parse().unwrap_or(0);
            form.set(next);
        })
    };

    let on_price = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.base_price = input.value().parse().unwrap_or(0.0);
            form.set(next);
        })
    };

    let toggle_enabled = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.enabled = input.checked();
            form.set(next);
        })
    };

    let toggle_activity = {
        let form = form.clone();
        Callback::from(move |code: String| {
            let mut next = (*form).clone();
            if let Some(pos) = next.activity_codes.iter().position(|c| *c == code) {
                next.activity_codes.remove(pos);
            } else {
                next.activity_codes.push(code);
            }
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*form).clone()))
    };

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog brutalist" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="dialog-header">
                    <h3>{format!("Add Resource to {}", props.service.name)}</h3>
                </header>

                <div class="dialog-body">
                    <div class="form-group">
                        <label for="res-name">{"Resource Name"}</label>
                        <input
                            type="text"
                            id="res-name"
                            value={form.name.clone()}
                            oninput={edit_text(|f, v| f.name = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="res-desc">{"Description"}</label>
                        <textarea id="res-desc" value={form.description.clone()} oninput={on_description} />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="res-opening">{"Opening Time"}</label>
                            <input
                                type="time"
                                id="res-opening"
                                value={form.opening_time.clone()}
                                oninput={edit_text(|f, v| f.opening_time = with_seconds(v))}
                            />
                        </div>
                        <div class="form-group">
                            <label for="res-closing">{"Closing Time"}</label>
                            <input
                                type="time"
                                id="res-closing"
                                value={form.closing_time.clone()}
                                oninput={edit_text(|f, v| f.closing_time = with_seconds(v))}
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="res-duration">{"Slot Duration (Min)"}</label>
                            <input
                                type="number"
                                id="res-duration"
                                value={form.slot_duration_minutes.to_string()}
                                oninput={on_duration}
                            />
                        </div>
                        <div class="form-group accent">
                            <label for="res-price">{"Base Price (₹)"}</label>
                            <input
                                type="number"
                                id="res-price"
                                value={form.base_price.to_string()}
                                oninput={on_price}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Assigned Activities"}</label>
                        <div class="activity-grid">
                            { for PREDEFINED_ACTIVITIES.iter().map(|(code, label)| {
                                let code_string = code.to_string();
                                let checked = form.activity_codes.iter().any(|c| c == code);
                                let toggle = toggle_activity.reform(move |_: Event| code_string.clone());
                                html! {
                                    <label class="activity-option" key={*code}>
                                        <input type="checkbox" {checked} onchange={toggle} />
                                        <span>{*label}</span>
                                    </label>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="switch-row">
                        <div>
                            <p class="switch-title">{"Resource Status"}</p>
                            <p class="switch-sub">{"Enable or disable this resource"}</p>
                        </div>
                        <input type="checkbox" class="switch" checked={form.enabled} onchange={toggle_enabled} />
                    </div>
                </div>

                <footer class="dialog-footer">
                    <button type="button" class="btn-outline" onclick={props.on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn-primary" disabled={props.busy} onclick={save}>
                        if props.busy { <span class="btn-spinner"></span> }
                        {"Create Resource"}
                    </button>
                </footer>
            </div>
        </div>
    }
}
