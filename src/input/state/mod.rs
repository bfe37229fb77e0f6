mod mouse;
mod render;
mod session;
#[cfg(test)]
mod tests;

pub use session::{InputSettings, InputState};
