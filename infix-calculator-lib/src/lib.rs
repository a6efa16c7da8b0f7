pub mod interpreter;
pub mod session;
