pub mod command;
mod period;
pub mod post;

pub use period::Period;
pub use post::Post;
