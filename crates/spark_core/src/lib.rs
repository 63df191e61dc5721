//! Spark Core
//!
//! Foundational primitives shared by the Spark component crates:
//!
//! - **Color**: RGBA color values used by theme tokens
//! - **EdgeInsets**: Directional insets published as paddings
//! - **Published**: Observable output cells with synchronous subscriber fan-out
//!
//! # Example
//!
//! ```rust
//! use spark_core::Published;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut width = Published::new(1.0f32);
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let seen_clone = seen.clone();
//! let subscription = width.subscribe(move |w| seen_clone.set(*w));
//!
//! width.set(2.0);
//! assert_eq!(seen.get(), 2.0);
//!
//! width.unsubscribe(subscription);
//! width.set(3.0);
//! assert_eq!(seen.get(), 2.0);
//! ```

pub mod color;
pub mod geometry;
pub mod published;

pub use color::Color;
pub use geometry::EdgeInsets;
pub use published::{Published, Subscription};
