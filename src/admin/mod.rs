pub mod user_details;

pub use user_details::{DialogData, UserAddress, UserDetails};
