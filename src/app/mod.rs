// Application layer: wires CLI commands to the quiz service.

pub mod commands;

pub use commands::execute;
