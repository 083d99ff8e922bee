// src/application/ports/mod.rs
pub mod time;

// Type alias to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
