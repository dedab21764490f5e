//! Service layer - bridge use cases on top of the Discord client and store.

pub mod feedback;
pub mod forum;
pub mod interactions;
pub mod relay;
pub mod threads;

pub use feedback::{complete_feedback, FeedbackOutcome};
pub use forum::sync_forum_tags;
pub use interactions::{dispatch, Reply};
pub use relay::{announce_update, announcement};
pub use threads::refresh_thread;
