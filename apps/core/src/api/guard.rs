use std::fmt;

use crate::domain::user::{Role, User};

/// Screens a session can ask to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Auth,
    Home,
    Admin,
    BarberDashboard,
    ClientDashboard,
    /// Public page of one barber, `/barbers/:id`
    BarberProfile(String),
    Unauthorized,
    NotFound,
}

impl Route {
    /// Parses an application path such as `/barbers/barber1`
    pub fn from_path(path: &str) -> Self {
        match path {
            "/auth" => Route::Auth,
            "/" | "" => Route::Home,
            "/admin" => Route::Admin,
            "/barber" => Route::BarberDashboard,
            "/client" => Route::ClientDashboard,
            "/unauthorized" => Route::Unauthorized,
            other => match other.strip_prefix("/barbers/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::BarberProfile(id.to_string()),
                _ => Route::NotFound,
            },
        }
    }

    /// Roles allowed on a protected route, `None` for public routes
    fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Admin => Some(&[Role::Admin]),
            Route::BarberDashboard => Some(&[Role::Barber]),
            Route::ClientDashboard | Route::BarberProfile(_) => Some(&[Role::Client, Role::Barber]),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Auth => write!(f, "/auth"),
            Route::Home => write!(f, "/"),
            Route::Admin => write!(f, "/admin"),
            Route::BarberDashboard => write!(f, "/barber"),
            Route::ClientDashboard => write!(f, "/client"),
            Route::BarberProfile(id) => write!(f, "/barbers/{}", id),
            Route::Unauthorized => write!(f, "/unauthorized"),
            Route::NotFound => write!(f, "/404"),
        }
    }
}

/// Outcome of the route guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Where a signed-in user lands from `/`
pub fn home_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::Admin,
        Role::Barber => Route::BarberDashboard,
        Role::Client => Route::ClientDashboard,
    }
}

/// Decides whether `current_user` may open `route`
pub fn authorize(current_user: Option<&User>, route: &Route) -> Access {
    match (route, current_user) {
        (Route::Auth, Some(_)) => Access::Redirect(Route::Home),
        (Route::Home, Some(user)) => Access::Redirect(home_for(user.role())),
        (Route::Home, None) => Access::Redirect(Route::Auth),
        _ => match (route.allowed_roles(), current_user) {
            (None, _) => Access::Granted,
            (Some(_), None) => Access::Redirect(Route::Auth),
            (Some(roles), Some(user)) if roles.contains(&user.role()) => Access::Granted,
            (Some(_), Some(_)) => Access::Redirect(Route::Unauthorized),
        },
    }
}
