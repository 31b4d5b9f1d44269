//! Repository implementations, one per aggregate.

pub mod booking;
pub mod house;
pub mod inquiry;
pub mod proof;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use house::HouseRepository;
pub use inquiry::InquiryRepository;
pub use proof::ProofRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
