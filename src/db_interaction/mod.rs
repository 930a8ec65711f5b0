pub mod menu;
pub mod orders;
pub mod user;

pub use menu::*;
pub use orders::*;
pub use user::*;
