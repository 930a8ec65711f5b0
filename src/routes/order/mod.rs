pub mod post;
pub mod update;

pub use post::*;
pub use update::*;
