use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

use super::controller::{
    create_post, delete_post, edit_post, find_by_location, get_post_by_id, get_posts, status_count,
};

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_post))
        .route("/getposts", get(get_posts))
        .route("/getpostbyid/{id}", get(get_post_by_id))
        .route("/editpost/{id}", put(edit_post))
        .route("/deletepost/{id}", delete(delete_post))
        .route("/statuscount", get(status_count))
        .route("/geolocation", get(find_by_location))
}
