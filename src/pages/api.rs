use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
};
use tracing::instrument;

use crate::{
    mask,
    pages::{self, PaymentReturnInfo, ReturnQuery},
    state::{AppState, NavTargets},
};

/// Landing screen for the provider redirect after an approved checkout.
#[instrument(skip_all)]
pub async fn confirmed(
    State(nav): State<NavTargets>,
    Query(query): Query<ReturnQuery>,
) -> Html<String> {
    tracing::debug!(params = %mask::secure_serializable(&query), "Provider redirect on confirmed return");
    let info = PaymentReturnInfo::from(query);
    tracing::info!(
        status = %info.status,
        external_reference = %mask::mask_reference(&info.external_reference),
        "Rendered confirmed screen"
    );
    Html(pages::confirmed::page(&info, &nav))
}

/// Landing screen for the provider redirect while the payment is processing.
#[instrument(skip_all)]
pub async fn pending(
    State(nav): State<NavTargets>,
    Query(query): Query<ReturnQuery>,
) -> Html<String> {
    tracing::debug!(params = %mask::secure_serializable(&query), "Provider redirect on pending return");
    tracing::info!("Rendered pending screen");
    Html(pages::pending::page(&query.payment_id, &nav))
}

/// Fallback for any path this service does not own.
pub async fn not_found(State(nav): State<NavTargets>) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found::page(&nav)))
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/reserva/confirmada", get(confirmed))
        .route("/reserva/pago-pendiente", get(pending))
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Query, State},
        response::Html,
    };

    use crate::{pages::ReturnQuery, state::NavTargets};

    fn nav() -> NavTargets {
        NavTargets {
            bookings: "/mis-reservas".to_string(),
            home: "/".to_string(),
        }
    }

    #[tokio::test]
    async fn confirmed_renders_for_bare_url() {
        let Html(html) = super::confirmed(State(nav()), Query(ReturnQuery::default())).await;
        assert!(html.contains("Reserva confirmada"));
        assert!(html.contains("Ver mis reservas"));
        assert!(html.contains("Volver al inicio"));
    }

    #[tokio::test]
    async fn pending_echoes_reference() {
        let query = ReturnQuery {
            payment_id: "abc-999".to_string(),
            ..Default::default()
        };
        let Html(html) = super::pending(State(nav()), Query(query)).await;
        assert!(html.contains("Referencia:"));
        assert!(html.contains("abc-999"));
    }
}
