pub mod book_store;
pub mod member_validator;
pub mod notifier;

pub use book_store::InMemoryBookStore;
pub use member_validator::InMemoryMemberValidator;
pub use notifier::{LoggingNotifier, Notification, NotificationKind};
