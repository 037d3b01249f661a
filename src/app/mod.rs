pub mod assembler;
pub mod cli;
pub mod config;

pub use assembler::ArtifactAssembler;
