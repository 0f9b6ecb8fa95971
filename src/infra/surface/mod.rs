pub mod console;
pub mod in_memory;

pub use console::ConsoleSurface;
pub use in_memory::InMemorySurface;
