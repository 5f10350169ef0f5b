// ============================================================================
// SERVICE CARD - ACORDEÓN DE SERVICIO CON GALERÍA Y RECURSOS
// ============================================================================
// La cabecera expande/colapsa; dentro van la galería de imágenes (máximo 4)
// y la lista de recursos del servicio, que se pide al expandir.
// ============================================================================

use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

use crate::models::{FacilityService, ServiceResource};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: FacilityService,
    pub expanded: bool,
    pub resources: Option<Vec<ServiceResource>>,
    pub resources_loading: bool,
    pub resources_error: Option<String>,
    pub uploading: bool,
    /// URLs de imagen con borrado en vuelo
    pub deleting: Vec<String>,
    pub on_toggle: Callback<i64>,
    pub on_edit: Callback<FacilityService>,
    pub on_add_resource: Callback<FacilityService>,
    pub on_resource_click: Callback<i64>,
    pub on_upload: Callback<(FacilityService, FileList)>,
    pub on_delete_image: Callback<(i64, String)>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let file_input = use_node_ref();

    let service = &props.service;
    let service_id = service.id;

    let toggle = props.on_toggle.reform(move |_: MouseEvent| service_id);

    let edit = {
        let on_edit = props.on_edit.clone();
        let service = service.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_edit.emit(service.clone());
        })
    };

    let add_resource = {
        let on_add_resource = props.on_add_resource.clone();
        let service = service.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_add_resource.emit(service.clone());
        })
    };

    let pick_files = {
        let file_input = file_input.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_files_chosen = {
        let on_upload = props.on_upload.clone();
        let service = service.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(files) = input.files() {
                if files.length() > 0 {
                    on_upload.emit((service.clone(), files));
                }
            }
            // Permite volver a elegir el mismo fichero
            input.set_value("");
        })
    };

    html! {
        <div class="service-card">
            <div
                class={classes!("service-card-head", props.expanded.then_some("expanded"))}
                onclick={toggle}
            >
                <div class="service-identity">
                    <div class="service-thumb">
                        if let Some(first) = service.images.first() {
                            <img src={first.clone()} alt={service.name.clone()} />
                        } else {
                            <span class="thumb-placeholder">{"📦"}</span>
                        }
                    </div>
                    <div>
                        <p class="service-name">{service.name.clone()}</p>
                        <p class="service-city">{service.city.clone()}</p>
                    </div>
                </div>
                <div class="service-meta">
                    <button class="btn-icon" onclick={edit} title="Edit service">{"✎"}</button>
                    <span class={classes!("status-chip", if service.availability { "active" } else { "offline" })}>
                        { if service.availability { "Active" } else { "Offline" } }
                    </span>
                    <span class="chevron">{ if props.expanded { "▲" } else { "▼" } }</span>
                </div>
            </div>

            if props.expanded {
                <div class="service-card-body">
                    // Galería
                    <div class="service-gallery">
                        <div class="gallery-head">
                            <h4>{"Service Gallery"}</h4>
                            if service.images.len() < 4 {
                                <>
                                    <input
                                        type="file"
                                        multiple=true
                                        accept="image/*"
                                        class="hidden-input"
                                        ref={file_input}
                                        onchange={on_files_chosen}
                                    />
                                    <button
                                        class="btn-ghost small"
                                        disabled={props.uploading}
                                        onclick={pick_files}
                                    >
                                        if props.uploading { <span class="btn-spinner"></span> }
                                        {"Upload"}
                                    </button>
                                </>
                            }
                        </div>
                        if service.images.is_empty() {
                            <div class="gallery-empty">
                                <p>{"No images uploaded yet"}</p>
                            </div>
                        } else {
                            <div class="gallery-strip">
                                { for service.images.iter().map(|image| {
                                    let url = image.clone();
                                    let busy = props.deleting.contains(image);
                                    let delete = {
                                        let on_delete = props.on_delete_image.clone();
                                        let url = url.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            on_delete.emit((service_id, url.clone()));
                                        })
                                    };
                                    html! {
                                        <div class="gallery-item" key={url.clone()}>
                                            <img src={url.clone()} alt={service.name.clone()} />
                                            <button class="btn-delete-img" disabled={busy} onclick={delete}>
                                                { if busy { "…" } else { "🗑" } }
                                            </button>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    </div>

                    // Recursos
                    if props.resources_loading {
                        <div class="resources-loading">
                            <span class="btn-spinner"></span>
                            <p>{"Loading resources..."}</p>
                        </div>
                    } else if let Some(message) = props.resources_error.clone() {
                        <div class="resources-error">
                            <p>{message}</p>
                        </div>
                    } else {
                        <div class="resource-list">
                            <div class="resource-list-head">
                                <h4>{"Available Resources"}</h4>
                                <button class="btn-ghost small" onclick={add_resource}>{"Add Resource"}</button>
                            </div>
                            {
                                match props.resources.as_deref() {
                                    None | Some([]) => html! {
                                        <p class="resources-empty">{"No resources available for this service"}</p>
                                    },
                                    Some(resources) => html! {
                                        <div class="resource-rows">
                                            { for resources.iter().map(|resource| {
                                                let resource_id = resource.id;
                                                html! {
                                                    <div
                                                        class="resource-row"
                                                        key={resource_id}
                                                        onclick={props.on_resource_click.reform(move |_: MouseEvent| resource_id)}
                                                    >
                                                        <div class="resource-info">
                                                            <p class="resource-name">{resource.name.clone()}</p>
                                                            <p class="resource-desc">{resource.description.clone()}</p>
                                                        </div>
                                                        <span class={classes!("status-chip", if resource.enabled { "enabled" } else { "disabled" })}>
                                                            { if resource.enabled { "Enabled" } else { "Disabled" } }
                                                        </span>
                                                        <div class="activity-chips">
                                                            { for resource.activities.iter().map(|activity| html! {
                                                                <span
                                                                    class={classes!("activity-chip", (!activity.enabled).then_some("off"))}
                                                                    key={activity.id}
                                                                >
                                                                    {activity.name.clone()}
                                                                </span>
                                                            }) }
                                                        </div>
                                                    </div>
                                                }
                                            }) }
                                        </div>
                                    },
                                }
                            }
                        </div>
                    }
                </div>
            }
        </div>
    }
}
