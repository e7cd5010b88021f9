mod broadcaster;
mod session_rng;

pub mod snake;

pub use broadcaster::{FrameBroadcaster, RenderFrame};
pub use session_rng::SessionRng;
