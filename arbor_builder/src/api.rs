mod command;
mod context;
mod core;
mod parameter;

pub use self::command::*;
pub use self::context::*;
pub use self::core::*;
pub use self::parameter::*;
