//! Ready-made boards built on the engine.

pub mod classic;
