//! Components shared by the public and admin pages

pub mod message;
pub mod pagination;
pub mod spinner;

pub use message::ErrorMessage;
pub use pagination::Pagination;
pub use spinner::{InlineSpinner, LoadingSpinner, Spinner, SpinnerSize};
