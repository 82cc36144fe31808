pub mod dates;
pub mod error;
pub mod point;
pub mod record;
pub mod time_key;
