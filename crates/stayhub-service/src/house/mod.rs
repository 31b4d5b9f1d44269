//! House browsing and the two-phase removal flow.

pub mod service;

pub use service::HouseService;
