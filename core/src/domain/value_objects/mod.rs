//! Value objects: validated wrappers around raw customer input.

mod email;
mod nickname;
mod password;
mod quantity;

pub use email::Email;
pub use nickname::Nickname;
pub use password::RawPassword;
pub use quantity::Quantity;
