pub mod main;
pub mod view;

pub use main::*;
pub use view::*;
