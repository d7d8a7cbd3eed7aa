//! Service implementations for Slack API endpoints.
//!
//! Each service module provides methods for interacting with a specific
//! category of Slack API endpoints.

pub mod bots;
pub mod conversations;
pub mod files;
pub mod messages;
pub mod users;

pub use bots::BotsService;
pub use conversations::ConversationsService;
pub use files::FilesService;
pub use messages::MessagesService;
pub use users::UsersService;
