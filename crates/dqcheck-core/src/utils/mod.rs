pub mod hasher;
pub mod rounding;
