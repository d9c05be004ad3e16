use crate::{pages, state::NavTargets};

/// Fallback document for paths outside the two return routes.
pub fn page(nav: &NavTargets) -> String {
    let body = format!(
        r#"        <h1>Página no encontrada</h1>
        <p class="description">La página que buscas no existe o fue movida.</p>
        <div class="action-buttons">
            <a href="{home}" class="btn btn-primary">Volver al inicio</a>
        </div>
"#,
        home = pages::escape_html(&nav.home),
    );
    pages::document("Página no encontrada", &body)
}
