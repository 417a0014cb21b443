//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and callbacks.

pub mod aliases;

pub use aliases::*;
