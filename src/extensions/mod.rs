pub mod chrono;
pub mod enums;
pub mod numbers;
