pub use crate::conversion::*;
pub use crate::register::*;
