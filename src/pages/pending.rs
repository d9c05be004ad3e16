use crate::{pages, state::NavTargets};

/// Render the "pago pendiente" screen.
pub fn page(payment_id: &str, nav: &NavTargets) -> String {
    let panel = if payment_id.is_empty() {
        String::new()
    } else {
        format!(
            "        <div class=\"panel\"><span class=\"label\">Referencia:</span><strong>{}</strong></div>\n",
            pages::escape_html(payment_id)
        )
    };

    let body = format!(
        r#"        <svg class="status-icon pending" fill="none" stroke="currentColor" stroke-width="1.5" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10"/>
            <path stroke-linecap="round" stroke-linejoin="round" d="M12 7v5l3 2"/>
        </svg>
        <h1>Pago pendiente</h1>
        <p class="description">Tu pago está siendo procesado. Te avisaremos por correo en cuanto se confirme.</p>
{panel}        <p class="notice">Revisa tu correo electrónico para conocer el estado de tu pago.</p>
        <div class="action-buttons">
            <a href="{home}" class="btn btn-primary">Volver al inicio</a>
        </div>
"#,
        home = pages::escape_html(&nav.home),
    );
    pages::document("Pago pendiente", &body)
}

#[cfg(test)]
mod tests {
    use crate::state::NavTargets;

    fn nav() -> NavTargets {
        NavTargets {
            bookings: "/mis-reservas".to_string(),
            home: "/".to_string(),
        }
    }

    #[test]
    fn shows_reference_panel() {
        let html = super::page("abc-999", &nav());
        assert!(html.contains("Referencia:"));
        assert!(html.contains("abc-999"));
    }

    #[test]
    fn bare_url_keeps_notice_and_home_link() {
        let html = super::page("", &nav());
        assert!(!html.contains("Referencia:"));
        assert!(html.contains("Revisa tu correo"));
        assert!(html.contains(r#"href="/""#));
    }
}
