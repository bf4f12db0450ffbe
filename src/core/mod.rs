pub mod backup;
pub mod block;
pub mod log;
pub mod pause;
pub mod session;
