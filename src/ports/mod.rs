pub mod book_store;
pub mod member_validator;
pub mod notifier;

pub use book_store::BookStore;
pub use member_validator::MemberValidator;
pub use notifier::Notifier;
