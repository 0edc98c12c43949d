//! Domain entities - the core business objects.

mod editor;
mod post;
mod subscriber;

pub mod query;
pub mod sanitize;

pub use editor::{Editor, EditorStatus};
pub use post::{Post, PostStatus, SocialMedia};
pub use subscriber::{Subscriber, SubscriberStatus};
