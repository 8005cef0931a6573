pub mod brkga;
pub mod rkga_optimizer;
pub mod sampling;
