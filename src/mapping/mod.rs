pub mod allocator;
pub mod codec;
pub mod mapper;
pub mod toon;
