pub mod auth;
pub mod posts;

pub use self::auth::model::User;
pub use self::posts::model::Post;
