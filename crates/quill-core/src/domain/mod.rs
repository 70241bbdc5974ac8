//! Domain entities - the core business objects.

mod post;

pub use post::{DEFAULT_AUTHOR, NewPost, Post, PostId};
