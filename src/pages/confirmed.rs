use crate::{
    pages::{self, PaymentReturnInfo},
    state::NavTargets,
};

/// Render the "reserva confirmada" screen.
pub fn page(info: &PaymentReturnInfo, nav: &NavTargets) -> String {
    let panel = if info.payment_id.is_empty() {
        String::new()
    } else {
        format!(
            "        <div class=\"panel\"><span class=\"label\">ID de pago:</span><strong>{}</strong></div>\n",
            pages::escape_html(&info.payment_id)
        )
    };

    let body = format!(
        r#"        <svg class="status-icon success" fill="none" stroke="currentColor" stroke-width="1.5" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10"/>
            <path stroke-linecap="round" stroke-linejoin="round" d="M8.5 12.5l2.5 2.5 4.5-5"/>
        </svg>
        <h1>¡Reserva confirmada!</h1>
        <p class="description">Tu pago fue procesado correctamente. En breve recibirás un correo con la confirmación de tu reserva.</p>
{panel}        <div class="action-buttons">
            <a href="{bookings}" class="btn btn-primary">Ver mis reservas</a>
            <a href="{home}" class="btn btn-secondary">Volver al inicio</a>
        </div>
"#,
        bookings = pages::escape_html(&nav.bookings),
        home = pages::escape_html(&nav.home),
    );
    pages::document("Reserva confirmada", &body)
}
