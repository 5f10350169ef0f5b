// ============================================================================
// ADMIN DETAIL - FICHA DE UN ADMINISTRADOR
// ============================================================================
// Panel a pantalla completa con el registro del negocio, los servicios del
// admin (acordeones con galería y recursos) y el desglose de ingresos.
// Los recursos de cada servicio se piden UNA vez al expandir y se cachean.
// ============================================================================

use std::collections::HashSet;

use wasm_bindgen_futures::spawn_local;
use web_sys::{FileList, FormData};
use yew::prelude::*;

use crate::components::manager::add_resource_dialog::{AddResourceDialog, ResourceForm};
use crate::components::manager::service_card::ServiceCard;
use crate::components::manager::service_dialog::{ServiceDialog, ServiceForm};
use crate::config::CONFIG;
use crate::hooks::{use_children, use_list};
use crate::models::{
    AdminAccount, FacilityService, NewResource, RevenueReport, ServiceResource,
};
use crate::services::manager_api;
use crate::state::MutationKind;
use crate::utils::constants::SAMPLE_MONTHLY_REVENUE;

/// Máximo de imágenes por servicio que acepta el backend
const MAX_SERVICE_IMAGES: u32 = 4;

#[derive(Clone, PartialEq)]
enum ServiceDialogMode {
    Closed,
    Add,
    Edit(FacilityService),
}

#[derive(Properties, PartialEq)]
pub struct AdminDetailProps {
    pub admin: AdminAccount,
    pub on_close: Callback<()>,
    pub on_resource_click: Callback<i64>,
}

#[function_component(AdminDetail)]
pub fn admin_detail(props: &AdminDetailProps) -> Html {
    let services = use_list::<FacilityService>();
    let resources = use_children::<ServiceResource>();
    let revenue = use_state(|| None::<Result<RevenueReport, String>>);

    let service_dialog = use_state(|| ServiceDialogMode::Closed);
    let saving_service = use_state(|| false);
    let resource_target = use_state(|| None::<FacilityService>);
    let saving_resource = use_state(|| false);

    let uploading = use_mut_ref(HashSet::<i64>::new);
    let deleting = use_mut_ref(HashSet::<String>::new);
    let redraw = use_force_update();

    let admin_id = props.admin.id;
    let page_size = CONFIG.page_config.default_page_size;

    {
        let services = services.clone();
        let revenue = revenue.clone();
        use_effect_with(admin_id, move |&admin_id| {
            services.load(0, manager_api::get_admin_services(admin_id, 0, page_size));

            let revenue = revenue.clone();
            spawn_local(async move {
                let outcome = manager_api::get_admin_revenue(admin_id).await;
                revenue.set(Some(outcome));
            });
        });
    }

    let go_to = {
        let services = services.clone();
        Callback::from(move |page: u32| {
            services.load(page, manager_api::get_admin_services(admin_id, page, page_size));
        })
    };

    // Expandir un servicio pide sus recursos solo la primera vez
    let on_toggle_service = {
        let resources = resources.clone();
        Callback::from(move |service_id: i64| {
            resources.toggle(service_id, manager_api::get_service_resources(service_id));
        })
    };

    let open_add_service = {
        let service_dialog = service_dialog.clone();
        Callback::from(move |_: MouseEvent| service_dialog.set(ServiceDialogMode::Add))
    };

    let open_edit_service = {
        let service_dialog = service_dialog.clone();
        Callback::from(move |service: FacilityService| {
            service_dialog.set(ServiceDialogMode::Edit(service));
        })
    };

    let close_service_dialog = {
        let service_dialog = service_dialog.clone();
        Callback::from(move |_| service_dialog.set(ServiceDialogMode::Closed))
    };

    let on_save_service = {
        let services = services.clone();
        let service_dialog = service_dialog.clone();
        let saving_service = saving_service.clone();

        Callback::from(move |form: ServiceForm| {
            saving_service.set(true);

            let after = {
                let service_dialog = service_dialog.clone();
                let saving_service = saving_service.clone();
                Callback::from(move |result: Result<(), String>| {
                    saving_service.set(false);
                    match result {
                        Ok(()) => service_dialog.set(ServiceDialogMode::Closed),
                        Err(message) => {
                            let shown = if message.is_empty() {
                                "Failed to save service".to_string()
                            } else {
                                message
                            };
                            web_sys::window().unwrap().alert_with_message(&shown).ok();
                        }
                    }
                })
            };

            match (*service_dialog).clone() {
                ServiceDialogMode::Add => {
                    let payload = form.into_new_service();
                    services.mutate(
                        MutationKind::Create,
                        async move {
                            manager_api::create_service(admin_id, &payload).await.map(|_| ())
                        },
                        move |page| manager_api::get_admin_services(admin_id, page, page_size),
                        after,
                    );
                }
                ServiceDialogMode::Edit(service) => {
                    let payload = form.into_update();
                    services.mutate(
                        MutationKind::Update,
                        async move {
                            manager_api::update_service(service.id, &payload).await.map(|_| ())
                        },
                        move |page| manager_api::get_admin_services(admin_id, page, page_size),
                        after,
                    );
                }
                ServiceDialogMode::Closed => {}
            }
        })
    };

    let open_add_resource = {
        let resource_target = resource_target.clone();
        Callback::from(move |service: FacilityService| resource_target.set(Some(service)))
    };

    let close_resource_dialog = {
        let resource_target = resource_target.clone();
        Callback::from(move |_| resource_target.set(None))
    };

    // Crear un recurso invalida la caché de hijos de su servicio
    let on_save_resource = {
        let resources = resources.clone();
        let resource_target = resource_target.clone();
        let saving_resource = saving_resource.clone();

        Callback::from(move |form: ResourceForm| {
            let Some(service) = (*resource_target).clone() else {
                return;
            };
            let service_id = service.id;
            saving_resource.set(true);

            let payload = NewResource {
                service_id,
                name: form.name,
                description: form.description,
                enabled: form.enabled,
                opening_time: form.opening_time,
                closing_time: form.closing_time,
                slot_duration_minutes: form.slot_duration_minutes,
                base_price: form.base_price,
                activity_codes: form.activity_codes,
            };

            let resources = resources.clone();
            let resource_target = resource_target.clone();
            let saving_resource = saving_resource.clone();
            spawn_local(async move {
                match manager_api::create_resource(service_id, &payload).await {
                    Ok(_) => {
                        saving_resource.set(false);
                        resource_target.set(None);
                        resources
                            .refetch(service_id, manager_api::get_service_resources(service_id));
                    }
                    Err(message) => {
                        saving_resource.set(false);
                        let shown = if message.is_empty() {
                            "Failed to create resource".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                }
            });
        })
    };

    let on_upload = {
        let services = services.clone();
        let uploading = uploading.clone();
        let redraw = redraw.clone();

        Callback::from(move |(service, files): (FacilityService, FileList)| {
            let service_id = service.id;
            if service.images.len() as u32 + files.length() > MAX_SERVICE_IMAGES {
                web_sys::window()
                    .unwrap()
                    .alert_with_message(&format!(
                        "A service can have at most {} images",
                        MAX_SERVICE_IMAGES
                    ))
                    .ok();
                return;
            }

            let Ok(form) = FormData::new() else {
                return;
            };
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    form.append_with_blob("images", &file).ok();
                }
            }

            if !uploading.borrow_mut().insert(service_id) {
                return;
            }
            redraw.force_update();

            let after = {
                let uploading = uploading.clone();
                let redraw = redraw.clone();
                Callback::from(move |result: Result<(), String>| {
                    uploading.borrow_mut().remove(&service_id);
                    redraw.force_update();
                    if let Err(message) = result {
                        let shown = if message.is_empty() {
                            "Image upload failed".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                })
            };

            services.mutate(
                MutationKind::Update,
                manager_api::upload_service_images(service_id, form),
                move |page| manager_api::get_admin_services(admin_id, page, page_size),
                after,
            );
        })
    };

    let on_delete_image = {
        let services = services.clone();
        let deleting = deleting.clone();
        let redraw = redraw.clone();

        Callback::from(move |(service_id, url): (i64, String)| {
            let confirmed = web_sys::window()
                .unwrap()
                .confirm_with_message("Remove this image from the service?")
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            if !deleting.borrow_mut().insert(url.clone()) {
                return;
            }
            redraw.force_update();

            let after = {
                let deleting = deleting.clone();
                let redraw = redraw.clone();
                let url = url.clone();
                Callback::from(move |result: Result<(), String>| {
                    deleting.borrow_mut().remove(&url);
                    redraw.force_update();
                    if let Err(message) = result {
                        let shown = if message.is_empty() {
                            "Failed to delete image".to_string()
                        } else {
                            message
                        };
                        web_sys::window().unwrap().alert_with_message(&shown).ok();
                    }
                })
            };

            let urls = vec![url.clone()];
            services.mutate(
                MutationKind::Delete,
                async move { manager_api::delete_service_images(service_id, &urls).await },
                move |page| manager_api::get_admin_services(admin_id, page, page_size),
                after,
            );
        })
    };

    let state = services.snapshot();
    let tree = resources.snapshot();
    let page = state.page();
    let total_pages = state.total_pages();

    html! {
        <div class="detail-overlay">
            <div class="detail-panel">
                <header class="detail-header">
                    <button class="btn-ghost" onclick={props.on_close.reform(|_| ())}>
                        {"← Back to admins"}
                    </button>
                    <div class="detail-identity">
                        <h2>{props.admin.name.clone()}</h2>
                        <p>{props.admin.email.clone()}</p>
                    </div>
                </header>

                // Registro del negocio
                <section class="summary-cards">
                    <div class="stat-card">
                        <p class="field-label">{"Business"}</p>
                        <h4>{props.admin.business_name.clone()}</h4>
                    </div>
                    <div class="stat-card">
                        <p class="field-label">{"GST Number"}</p>
                        <h4 class="mono">{props.admin.gst_number.clone()}</h4>
                    </div>
                    <div class="stat-card">
                        <p class="field-label">{"Registered Address"}</p>
                        <h4>{format!("{}, {}", props.admin.business_address, props.admin.city)}</h4>
                    </div>
                </section>

                // Servicios e instalaciones
                <section class="detail-section">
                    <div class="section-head">
                        <h3>{"Services & Facilities"}</h3>
                        <button class="btn-primary" onclick={open_add_service}>{"＋ Add Service"}</button>
                    </div>

                    if state.is_loading() && state.items().is_empty() {
                        <div class="screen-loading compact">
                            <div class="spinner"></div>
                            <p class="loading-title">{"Loading services"}</p>
                        </div>
                    } else if let Some(message) = state.error() {
                        <div class="inline-error">
                            <p>{message.to_string()}</p>
                            <button class="btn-ghost" onclick={go_to.reform(move |_| page)}>{"Retry"}</button>
                        </div>
                    } else if state.is_empty_success() {
                        <div class="screen-empty">
                            <p class="empty-title">{"No services registered yet"}</p>
                            <p class="empty-sub">{"Create the first facility for this admin"}</p>
                        </div>
                    } else {
                        <div class="service-stack">
                            { for state.items().iter().map(|service| {
                                let service_id = service.id;
                                html! {
                                    <ServiceCard
                                        key={service_id}
                                        service={service.clone()}
                                        expanded={tree.is_expanded(service_id)}
                                        resources={tree.children_of(service_id).map(|r| r.to_vec())}
                                        resources_loading={tree.is_loading(service_id)}
                                        resources_error={tree.error_of(service_id).map(String::from)}
                                        uploading={uploading.borrow().contains(&service_id)}
                                        deleting={deleting.borrow().iter().cloned().collect::<Vec<_>>()}
                                        on_toggle={on_toggle_service.clone()}
                                        on_edit={open_edit_service.clone()}
                                        on_add_resource={open_add_resource.clone()}
                                        on_resource_click={props.on_resource_click.clone()}
                                        on_upload={on_upload.clone()}
                                        on_delete_image={on_delete_image.clone()}
                                    />
                                }
                            }) }
                        </div>

                        if total_pages > 1 {
                            <div class="pager">
                                <button
                                    class="btn-ghost"
                                    disabled={state.is_loading() || page == 0}
                                    onclick={go_to.reform(move |_| page.saturating_sub(1))}
                                >
                                    {"Previous"}
                                </button>
                                <span class="pager-label">
                                    {format!("Page {} of {}", page + 1, total_pages)}
                                </span>
                                <button
                                    class="btn-ghost"
                                    disabled={state.is_loading() || page + 1 >= total_pages}
                                    onclick={go_to.reform(move |_| page + 1)}
                                >
                                    {"Next"}
                                </button>
                            </div>
                        }
                    }
                </section>

                // Ingresos
                <section class="detail-section">
                    <div class="section-head">
                        <h3>{"Revenue Performance"}</h3>
                    </div>
                    { revenue_section(&revenue) }
                </section>
            </div>

            {
                match (*service_dialog).clone() {
                    ServiceDialogMode::Closed => html! {},
                    ServiceDialogMode::Add => html! {
                        <ServiceDialog
                            is_add=true
                            initial={ServiceForm::for_new(&props.admin)}
                            busy={*saving_service}
                            on_save={on_save_service.clone()}
                            on_cancel={close_service_dialog.clone()}
                        />
                    },
                    ServiceDialogMode::Edit(service) => html! {
                        <ServiceDialog
                            is_add=false
                            initial={ServiceForm::from_service(&service)}
                            busy={*saving_service}
                            on_save={on_save_service.clone()}
                            on_cancel={close_service_dialog.clone()}
                        />
                    },
                }
            }

            if let Some(service) = (*resource_target).clone() {
                <AddResourceDialog
                    {service}
                    busy={*saving_resource}
                    on_save={on_save_resource.clone()}
                    on_cancel={close_resource_dialog.clone()}
                />
            }
        </div>
    }
}

/// Desglose de ingresos: totales, reparto por servicio y serie mensual de
/// muestra mientras el backend no expone la serie real.
fn revenue_section(revenue: &Option<Result<RevenueReport, String>>) -> Html {
    match revenue {
        None => html! {
            <div class="screen-loading compact">
                <div class="spinner"></div>
                <p class="loading-title">{"Crunching revenue data"}</p>
            </div>
        },
        Some(Err(message)) => html! {
            <div class="inline-error">
                <p>{message.clone()}</p>
            </div>
        },
        Some(Ok(report)) => {
            let peak = SAMPLE_MONTHLY_REVENUE
                .iter()
                .map(|(_, value)| *value)
                .max()
                .unwrap_or(1)
                .max(1);

            html! {
                <div class="revenue-block">
                    <div class="summary-cards">
                        <div class="stat-card accent">
                            <p class="field-label">{"Total Revenue"}</p>
                            <h3>{format!("₹{:.0}", report.total_revenue)}</h3>
                        </div>
                        <div class="stat-card">
                            <p class="field-label">{"Total Bookings"}</p>
                            <h3>{report.total_bookings}</h3>
                        </div>
                        <div class="stat-card">
                            <p class="field-label">{"Avg / Booking"}</p>
                            <h3>{format!("₹{:.0}", report.average_revenue_per_booking)}</h3>
                        </div>
                    </div>

                    <div class="revenue-chart">
                        { for SAMPLE_MONTHLY_REVENUE.iter().map(|(month, value)| {
                            let height = (*value as f64 / peak as f64 * 100.0).round() as u32;
                            html! {
                                <div class="chart-column" key={*month}>
                                    <div class="chart-bar" style={format!("height: {}%", height)}></div>
                                    <span class="chart-label">{*month}</span>
                                </div>
                            }
                        }) }
                    </div>

                    if report.service_revenues.is_empty() {
                        <p class="empty-sub">{"No revenue recorded per service yet"}</p>
                    } else {
                        <div class="revenue-rows">
                            { for report.service_revenues.iter().map(|service| html! {
                                <div class="revenue-row" key={service.service_id}>
                                    <div>
                                        <p class="cell-primary">{service.service_name.clone()}</p>
                                        <p class="cell-sub">
                                            {format!("{} bookings", service.total_bookings)}
                                        </p>
                                    </div>
                                    <div class="text-right">
                                        <p class="cell-primary">{format!("₹{:.0}", service.total_revenue)}</p>
                                        <p class="cell-sub">
                                            {format!("avg ₹{:.0}", service.average_revenue_per_booking)}
                                        </p>
                                    </div>
                                    if !service.resource_revenues.is_empty() {
                                        <div class="revenue-nested">
                                            { for service.resource_revenues.iter().map(|resource| html! {
                                                <div class="revenue-nested-row" key={resource.resource_id}>
                                                    <span>{resource.resource_name.clone()}</span>
                                                    <span>
                                                        {format!(
                                                            "₹{:.0} • {} bookings",
                                                            resource.total_revenue, resource.booking_count
                                                        )}
                                                    </span>
                                                </div>
                                            }) }
                                        </div>
                                    }
                                </div>
                            }) }
                        </div>
                    }
                </div>
            }
        }
    }
}
