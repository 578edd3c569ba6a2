mod base;
mod interface;
mod middleware;
mod printer;

pub use self::base::{AccessError, SetupError, UsageError};
pub(crate) use self::base::CommandNode;
pub(crate) use self::interface::*;
pub use self::middleware::*;
pub(crate) use self::printer::*;
