pub mod animator;
pub mod planner;
pub mod renderer;
pub mod session;

pub use animator::*;
pub use planner::*;
pub use renderer::*;
pub use session::*;
