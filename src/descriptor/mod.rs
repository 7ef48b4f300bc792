//! # Descriptor Module
//!
//! Static descriptions of controllers: their fully-qualified names, class-level
//! group metadata, methods, parameters and HTTP verb markers.
//!
//! Descriptors are built once at start-up, either programmatically with the
//! builder methods or from YAML/JSON manifests, and are consumed read-only by
//! the route assembler.
//!
//! ```yaml
//! controllers:
//!   - name: App::Http::Controllers::PostController
//!     route: { middleware: [auth] }
//!     methods:
//!       - name: show
//!         parameters:
//!           - { name: request, type: Request }
//!           - { name: id }
//!         markers:
//!           - get: {}
//! ```

mod load;
mod types;

pub use load::*;
pub use types::*;
