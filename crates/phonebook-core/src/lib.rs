pub mod directory;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod time;

pub use directory::{ContactDirectory, DuplicatePolicy};
pub use domain::*;
pub use dto::{ContactDto, UpcomingBirthdayDto};
pub use error::{CoreError, ErrorKind};
pub use rules::*;
