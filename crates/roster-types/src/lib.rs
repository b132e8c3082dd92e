mod field;
mod profile;
mod record;
mod requester;

pub use field::*;
pub use profile::*;
pub use record::*;
pub use requester::*;

/// Upper bound (inclusive) accepted for a user's age.
pub const MAX_AGE: i32 = 120;

/// Number of digits in a well-formed mobile number.
pub const MOBILE_DIGITS: usize = 10;
