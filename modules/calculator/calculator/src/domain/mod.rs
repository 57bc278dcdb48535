//! Domain layer for calculator module
//!
//! Contains the arithmetic primitives and the accumulator.

pub mod arithmetic;
pub mod accumulator;
