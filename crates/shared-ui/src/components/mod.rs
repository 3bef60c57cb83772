// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod label;
pub mod progress;
pub mod separator;
pub mod tabs;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use tabs::*;
