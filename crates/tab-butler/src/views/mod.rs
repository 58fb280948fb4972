pub mod debug_console;
pub mod palette;
pub mod tabs;
