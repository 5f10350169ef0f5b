// ============================================================================
// MANAGER API - Endpoints del portal de operaciones
// ============================================================================
// Wrappers tipados finos sobre api_client; las rutas y métodos son los que
// espera el backend, incluidas sus rarezas (update de reglas por POST).
// ============================================================================

use web_sys::FormData;

use crate::models::{
    ActivityPayload, AdminAccount, AppUser, BookingRecord, FacilityService, InvoiceTemplate,
    Listing, NewAdminAccount, NewInvoiceTemplate, NewPriceRule, NewResource, NewService, Page,
    PendingBooking, PriceRule, PriceRuleUpdate, ResourceBooking, ResourceConfig, ResourceSlot,
    RevenueReport, ServiceActivity, ServiceResource, ServiceUpdate, SlotConfigUpdate,
};
use crate::services::api_client;

// ============================================================================
// Admins y sus instalaciones
// ============================================================================

pub async fn get_admins(page: u32, size: u32) -> Result<Page<AdminAccount>, String> {
    log::info!("📋 Obteniendo admins (página {})", page);
    api_client::get_json(&format!("/manager/admins?page={}&size={}", page, size)).await
}

pub async fn create_admin(data: &NewAdminAccount) -> Result<(), String> {
    log::info!("➕ Creando admin: {}", data.name);
    api_client::post_unit("/manager/admins", data).await
}

pub async fn get_admin_services(
    admin_id: i64,
    page: u32,
    size: u32,
) -> Result<Page<FacilityService>, String> {
    log::info!("🏟️ Obteniendo servicios del admin {}", admin_id);
    api_client::get_json(&format!(
        "/manager/admins/{}/services?page={}&size={}",
        admin_id, page, size
    ))
    .await
}

pub async fn create_service(admin_id: i64, data: &NewService) -> Result<FacilityService, String> {
    log::info!("➕ Creando servicio para admin {}: {}", admin_id, data.name);
    api_client::post_json(&format!("/manager/service-details/{}", admin_id), data).await
}

pub async fn update_service(
    service_id: i64,
    data: &ServiceUpdate,
) -> Result<FacilityService, String> {
    log::info!("📝 Actualizando servicio {}", service_id);
    api_client::put_json(&format!("/manager/services/{}", service_id), data).await
}

pub async fn upload_service_images(service_id: i64, form: FormData) -> Result<(), String> {
    log::info!("🖼️ Subiendo imágenes al servicio {}", service_id);
    api_client::post_multipart_unit(&format!("/manager/services/{}/images", service_id), form).await
}

pub async fn delete_service_images(service_id: i64, image_urls: &[String]) -> Result<(), String> {
    log::info!("🗑️ Eliminando {} imágenes del servicio {}", image_urls.len(), service_id);
    api_client::delete_unit_with_body(
        &format!("/manager/services/{}/images", service_id),
        &image_urls,
    )
    .await
}

pub async fn get_service_resources(service_id: i64) -> Result<Vec<ServiceResource>, String> {
    log::info!("🧱 Obteniendo recursos del servicio {}", service_id);
    api_client::get_json(&format!("/manager/services/{}/resources", service_id)).await
}

pub async fn create_resource(
    service_id: i64,
    data: &NewResource,
) -> Result<ServiceResource, String> {
    log::info!("➕ Creando recurso en servicio {}: {}", service_id, data.name);
    api_client::post_json(&format!("/manager/services/{}/resources", service_id), data).await
}

pub async fn get_admin_revenue(admin_id: i64) -> Result<RevenueReport, String> {
    log::info!("💰 Obteniendo ingresos del admin {}", admin_id);
    api_client::get_json(&format!("/manager/admins/{}/revenue", admin_id)).await
}

// ============================================================================
// Reservas
// ============================================================================

pub async fn get_pending_bookings(page: u32, size: u32) -> Result<Page<PendingBooking>, String> {
    log::info!("⏳ Obteniendo reservas pendientes (página {})", page);
    api_client::get_json(&format!("/manager/bookings/pending?page={}&size={}", page, size)).await
}

pub async fn approve_booking(booking_id: i64) -> Result<(), String> {
    log::info!("✅ Aprobando reserva {}", booking_id);
    api_client::put_unit(&format!("/manager/bookings/{}/approve", booking_id)).await
}

pub async fn cancel_booking(booking_id: i64) -> Result<(), String> {
    log::info!("🚫 Cancelando reserva {}", booking_id);
    api_client::put_unit(&format!("/manager/bookings/{}/cancel", booking_id)).await
}

pub async fn get_all_bookings(page: u32, size: u32) -> Result<Page<BookingRecord>, String> {
    log::info!("📖 Obteniendo reservas (página {})", page);
    api_client::get_json(&format!("/manager/bookings?page={}&size={}", page, size)).await
}

pub async fn get_booking_by_id(booking_id: i64) -> Result<BookingRecord, String> {
    log::info!("🔍 Obteniendo reserva {}", booking_id);
    api_client::get_json(&format!("/manager/booking/{}", booking_id)).await
}

pub async fn get_resource_bookings(
    resource_id: i64,
    date: &str,
) -> Result<Vec<ResourceBooking>, String> {
    log::info!("📅 Reservas del recurso {} para {}", resource_id, date);
    let listing: Listing<ResourceBooking> = api_client::get_json(&format!(
        "/manager/resources/{}/bookings?bookingDate={}",
        resource_id, date
    ))
    .await?;
    Ok(listing.into_vec())
}

pub async fn get_resource_slots(resource_id: i64, date: &str) -> Result<Vec<ResourceSlot>, String> {
    log::info!("🕐 Slots del recurso {} para {}", resource_id, date);
    api_client::get_json(&format!(
        "/manager/resources/{}/slots?date={}",
        resource_id, date
    ))
    .await
}

// ============================================================================
// Usuarios
// ============================================================================

pub async fn get_users(page: u32, size: u32) -> Result<Page<AppUser>, String> {
    log::info!("👥 Obteniendo usuarios (página {})", page);
    api_client::get_json(&format!("/manager/users?page={}&size={}", page, size)).await
}

pub async fn get_user_bookings(
    user_id: i64,
    page: u32,
    size: u32,
) -> Result<Page<BookingRecord>, String> {
    log::info!("📚 Historial del usuario {} (página {})", user_id, page);
    api_client::get_json(&format!(
        "/manager/users/{}/bookings?page={}&size={}",
        user_id, page, size
    ))
    .await
}

// ============================================================================
// Precios y configuración de recursos
// ============================================================================

pub async fn get_price_rules(resource_id: i64) -> Result<Vec<PriceRule>, String> {
    log::info!("🏷️ Reglas de precio del recurso {}", resource_id);
    api_client::get_json(&format!("/manager/{}/price-rules", resource_id)).await
}

pub async fn add_price_rule(data: &NewPriceRule) -> Result<PriceRule, String> {
    log::info!("➕ Creando regla de precio para recurso {}", data.resource_id);
    api_client::post_json("/manager/resources/price-rules", data).await
}

// El backend acepta la actualización por POST, no PUT
pub async fn update_price_rule(rule_id: i64, data: &PriceRuleUpdate) -> Result<PriceRule, String> {
    log::info!("📝 Actualizando regla de precio {}", rule_id);
    api_client::post_json(&format!("/manager/resources/price-rules/{}", rule_id), data).await
}

pub async fn delete_price_rule(rule_id: i64) -> Result<(), String> {
    log::info!("🗑️ Eliminando regla de precio {}", rule_id);
    api_client::delete_unit(&format!("/manager/resources/price-rules/{}", rule_id)).await
}

pub async fn get_resource_config(resource_id: i64) -> Result<ResourceConfig, String> {
    log::info!("⚙️ Configuración del recurso {}", resource_id);
    api_client::get_json(&format!("/manager/{}/config", resource_id)).await
}

pub async fn update_resource_config(data: &SlotConfigUpdate) -> Result<ResourceConfig, String> {
    log::info!("⚙️ Actualizando configuración del recurso {}", data.resource_id);
    api_client::post_json("/manager/resources/slot-config", data).await
}

// ============================================================================
// Actividades deportivas
// ============================================================================

pub async fn get_activities() -> Result<Vec<ServiceActivity>, String> {
    log::info!("🎾 Obteniendo actividades");
    api_client::get_json("/manager/activities").await
}

pub async fn create_activity(data: &ActivityPayload) -> Result<ServiceActivity, String> {
    log::info!("➕ Creando actividad: {}", data.code);
    api_client::post_json("/manager/activities", data).await
}

pub async fn update_activity(id: i64, data: &ActivityPayload) -> Result<ServiceActivity, String> {
    log::info!("📝 Actualizando actividad {}", id);
    api_client::put_json(&format!("/manager/activities/{}", id), data).await
}

pub async fn delete_activity(id: i64) -> Result<(), String> {
    log::info!("🗑️ Eliminando actividad {}", id);
    api_client::delete_unit(&format!("/manager/activities/{}", id)).await
}

pub async fn enable_activity(id: i64) -> Result<(), String> {
    log::info!("🟢 Activando actividad {}", id);
    api_client::patch_unit(&format!("/manager/activities/{}/enable", id)).await
}

pub async fn disable_activity(id: i64) -> Result<(), String> {
    log::info!("🔴 Desactivando actividad {}", id);
    api_client::patch_unit(&format!("/manager/activities/{}/disable", id)).await
}

// ============================================================================
// Plantillas de factura
// ============================================================================

pub async fn get_active_invoice_template() -> Result<InvoiceTemplate, String> {
    log::info!("🧾 Obteniendo plantilla de factura activa");
    api_client::get_json("/api/manager/invoice-template/active").await
}

pub async fn create_invoice_template(data: &NewInvoiceTemplate) -> Result<InvoiceTemplate, String> {
    log::info!("➕ Creando versión de plantilla: {}", data.name);
    api_client::post_json("/api/manager/invoice-template", data).await
}

pub async fn activate_invoice_template(version: u32) -> Result<InvoiceTemplate, String> {
    log::info!("⭐ Activando plantilla v{}", version);
    api_client::put_json_no_body(&format!("/api/manager/invoice-template/activate/{}", version))
        .await
}

pub async fn get_invoice_template_by_version(version: u32) -> Result<InvoiceTemplate, String> {
    log::info!("🔍 Obteniendo plantilla v{}", version);
    api_client::get_json(&format!("/api/manager/invoice-template/{}", version)).await
}
