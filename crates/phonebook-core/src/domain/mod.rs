pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::{is_valid_phone, Phone, PHONE_DIGITS};
pub use record::ContactRecord;
