pub mod avatar;
pub mod detector;
pub mod progress;
pub mod time;
