// ============================================================================
// SERVICE DIALOG - ALTA Y EDICIÓN DE SERVICIOS
// ============================================================================
// El mismo formulario sirve para crear y editar; cambia el payload final:
// crear manda códigos de actividad y amenities, editar manda availability.
// ============================================================================

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{ActivityRef, AdminAccount, FacilityService, NewService, ServiceUpdate};
use crate::utils::constants::PREDEFINED_ACTIVITIES;

/// Estado del formulario, común a los dos modos
#[derive(Clone, PartialEq, Default)]
pub struct ServiceForm {
    pub name: String,
    pub location: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub contact_number: String,
    pub activity_codes: Vec<String>,
    pub amenities: Vec<String>,
    pub availability: bool,
}

impl ServiceForm {
    /// Alta: ciudad y contacto se precargan con los datos del admin
    pub fn for_new(admin: &AdminAccount) -> Self {
        Self {
            city: admin.city.clone(),
            contact_number: admin.email.clone(),
            availability: true,
            ..Self::default()
        }
    }

    pub fn from_service(service: &FacilityService) -> Self {
        Self {
            name: service.name.clone(),
            location: service.location.clone(),
            city: service.city.clone(),
            latitude: service.latitude,
            longitude: service.longitude,
            description: service.description.clone(),
            contact_number: service.contact_number.clone(),
            activity_codes: service
                .activities
                .iter()
                .map(|act| match act {
                    ActivityRef::Code(code) => code.clone(),
                    ActivityRef::Full(activity) => activity.code.clone(),
                })
                .collect(),
            amenities: service.amenities.clone(),
            availability: service.availability,
        }
    }

    pub fn into_new_service(self) -> NewService {
        NewService {
            name: self.name,
            location: self.location,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            contact_number: self.contact_number,
            activity_codes: self.activity_codes,
            amenities: self.amenities,
        }
    }

    /// Editar no toca actividades ni amenities, eso va por otro flujo
    pub fn into_update(self) -> ServiceUpdate {
        ServiceUpdate {
            name: self.name,
            location: self.location,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            contact_number: self.contact_number,
            availability: self.availability,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDialogProps {
    pub is_add: bool,
    pub initial: ServiceForm,
    pub busy: bool,
    pub on_save: Callback<ServiceForm>,
    pub on_cancel: Callback<()>,
}

#[function_component(ServiceDialog)]
pub fn service_dialog(props: &ServiceDialogProps) -> Html {
    let form = use_state(|| props.initial.clone());

    let edit_text = |apply: fn(&mut ServiceForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let edit_number = |apply: fn(&mut ServiceForm, f64)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let parsed = input.value().parse::<f64>().unwrap_or(0.0);
            let mut next = (*form).clone();
            apply(&mut next, parsed);
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

    let toggle_availability = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.availability = input.checked();
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

    let on_amenities = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.amenities = input
                .value()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            form.set(next);
        })
    };

    let save = {
        let form = form.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit((*form).clone()))
    };

    let title = if props.is_add {
        "Add New Service"
    } else {
        "Edit Service Details"
    };
    let save_label = if props.is_add { "Create Service" } else { "Save Changes" };

    html! {
        <div class="dialog-backdrop" onclick={props.on_cancel.reform(|_| ())}>
            <div class="dialog brutalist" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <header class="dialog-header">
                    <h3>{title}</h3>
                    if !props.is_add {
                        <span class={classes!("status-chip", if form.availability { "active" } else { "offline" })}>
                            { if form.availability { "Active" } else { "Offline" } }
                        </span>
                    }
                </header>

                <div class="dialog-body">
                    <div class="switch-row">
                        <div>
                            <p class="switch-title">{"Service Visibility"}</p>
                            <p class="switch-sub">{"Control if this service is bookable online"}</p>
                        </div>
                        <input
                            type="checkbox"
                            class="switch"
                            checked={form.availability}
                            onchange={toggle_availability}
                        />
                    </div>

                    <div class="form-group">
                        <label for="name">{"Service Name"}</label>
                        <input
                            type="text"
                            id="name"
                            value={form.name.clone()}
                            oninput={edit_text(|f, v| f.name = v)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="location">{"Full Address"}</label>
                        <input
                            type="text"
                            id="location"
                            value={form.location.clone()}
                            oninput={edit_text(|f, v| f.location = v)}
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="lat">{"Latitude"}</label>
                            <input
                                type="number"
                                id="lat"
                                value={form.latitude.to_string()}
                                oninput={edit_number(|f, v| f.latitude = v)}
                            />
                        </div>
                        <div class="form-group">
                            <label for="lng">{"Longitude"}</label>
                            <input
                                type="number"
                                id="lng"
                                value={form.longitude.to_string()}
                                oninput={edit_number(|f, v| f.longitude = v)}
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Activities"}</label>
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

                    <div class="form-group">
                        <label for="amenities">{"Amenities (comma-separated)"}</label>
                        <input
                            type="text"
                            id="amenities"
                            placeholder="WiFi, Parking, AC..."
                            value={form.amenities.join(", ")}
                            oninput={on_amenities}
                        />
                    </div>
                </div>

                <footer class="dialog-footer">
                    <button
                        type="button"
                        class="btn-outline"
                        onclick={props.on_cancel.reform(|_| ())}
                    >
                        {"Cancel"}
                    </button>
                    <button type="button" class="btn-primary" disabled={props.busy} onclick={save}>
                        if props.busy { <span class="btn-spinner"></span> }
                        {save_label}
                    </button>
                </footer>
            </div>
        </div>
    }
}
