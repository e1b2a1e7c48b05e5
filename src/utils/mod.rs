pub mod fps_counter;
pub mod tools;

pub use self::fps_counter::FpsCounter;
pub use self::tools::show_rust_core_dependencies;
