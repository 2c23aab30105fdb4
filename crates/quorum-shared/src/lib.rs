//! # quorum-shared
//!
//! Domain types shared by the Quorum conversation client crates: id
//! newtypes, wire models, limits, and the locally persisted session blob.
//!
//! Every wire model derives `Serialize` and `Deserialize` so it can be
//! handed directly to the presentation layer.

pub mod constants;
pub mod models;
pub mod session;
pub mod types;

mod error;

pub use error::SessionError;
pub use models::*;
pub use session::{SessionUser, StoredSession};
pub use types::{ConversationId, MessageId, Scope};
