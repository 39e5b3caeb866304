use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{login_user, register_user, whoami};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/", get(whoami))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}
