//! Domain entities - the core business objects.

mod post;
pub mod user;

pub use post::Post;
pub use user::User;
