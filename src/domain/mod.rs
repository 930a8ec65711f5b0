pub mod order_total;
pub mod phone_number;
pub mod user_login;
pub mod user_role;

pub use order_total::OrderTotal;
pub use phone_number::PhoneNumber;
pub use user_login::UserLogin;
pub use user_role::{Capability, Role};
