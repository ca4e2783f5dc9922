pub mod compute;
pub mod entities;
pub mod framebuffer;
pub mod input;
pub mod render;
pub mod store;
