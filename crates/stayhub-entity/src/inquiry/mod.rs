//! Inquiry entities.

pub mod model;
pub mod status;

pub use model::{CreateInquiry, Inquiry};
pub use status::InquiryStatus;
