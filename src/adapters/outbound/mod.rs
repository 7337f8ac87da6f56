pub mod network;
pub mod storage;
pub mod terms;
