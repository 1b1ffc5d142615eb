//! Assistant chat — canned replies picked by keyword, no model behind it.

pub mod handlers;
pub mod replies;
