//! Domain model types for package-to-center assignment.
//!
//! Provides the core abstractions: packages with a drop location and a
//! delivery-time weight, distribution centers with a capacity, the
//! validated instance that holds both, and the assignment that maps one to
//! the other.

mod assignment;
mod center;
mod instance;
mod package;

pub use assignment::{Assignment, Violation, ViolationType};
pub use center::Center;
pub use instance::Instance;
pub use package::{Package, Point};
