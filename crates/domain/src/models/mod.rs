pub mod recommendation;
pub mod task;
pub mod worker;

pub use recommendation::*;
pub use task::*;
pub use worker::*;
