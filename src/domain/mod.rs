pub mod booking;
pub mod showing;
pub mod summary;

pub use booking::*;
pub use showing::*;
pub use summary::*;
