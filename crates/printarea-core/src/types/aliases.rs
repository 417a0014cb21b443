//! Type aliases for commonly used complex types.
//!
//! The interaction core is single-threaded: gestures arrive serially from the
//! host, so shared state is `Rc<RefCell<T>>` and callbacks are plain boxed
//! closures without `Send` bounds.
//!
//! ## Usage
//!
//! ```rust
//! use printarea_core::types::*;
//!
//! let log: Shared<Vec<f64>> = shared(Vec::new());
//! let sink = log.clone();
//! let mut on_angle: DataCallback<f64> = Box::new(move |deg| sink.borrow_mut().push(deg));
//! on_angle(90.0);
//! assert_eq!(log.borrow().as_slice(), &[90.0]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Hosts use it to observe results produced inside callbacks.
pub type Shared<T> = Rc<RefCell<T>>;

/// A callback that receives a single parameter.
pub type DataCallback<T> = Box<dyn FnMut(T)>;

/// A callback that receives two parameters.
///
/// Used for the gesture completion notification `(rectangle, degrees)`.
pub type DataCallback2<T, U> = Box<dyn FnMut(T, U)>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
