pub mod login;
pub mod logout;
pub mod register;

pub use login::*;
pub use logout::*;
pub use register::*;
