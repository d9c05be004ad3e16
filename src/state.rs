#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub nav: NavTargets,
}

/// Navigation targets embedded in every rendered screen.
///
/// Resolved once at startup; fixed for the lifetime of the process and
/// independent of anything the provider redirect carries.
#[derive(Debug, Clone)]
pub struct NavTargets {
    pub bookings: String,
    pub home: String,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            nav: NavTargets::from_env(),
        }
    }
}

impl NavTargets {
    pub fn from_env() -> Self {
        let bookings =
            std::env::var("BOOKINGS_PATH").unwrap_or_else(|_| "/mis-reservas".to_string());
        let home = std::env::var("HOME_PATH").unwrap_or_else(|_| "/".to_string());
        tracing::debug!(%bookings, %home, "Resolved navigation targets");
        Self { bookings, home }
    }
}
