use yew::prelude::*;

/// Pantalla de aterrizaje del portal de operaciones. La parrilla horaria
/// llegará con el motor de scheduling.
#[function_component(BookingManagement)]
pub fn booking_management() -> Html {
    html! {
        <div class="screen">
            <div class="screen-heading">
                <h2>{"Booking Management"}</h2>
                <p>{"Real-time scheduling and reservation oversight will be managed here."}</p>
            </div>

            <div class="placeholder-card hero">
                <div class="placeholder-center">
                    <p>{"Timeline Grid Placeholder"}</p>
                    <span>{"Connect the scheduling engine to visualize ground bookings."}</span>
                </div>
            </div>
        </div>
    }
}
