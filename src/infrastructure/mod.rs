pub mod console;
pub mod in_memory;
pub mod pix;
