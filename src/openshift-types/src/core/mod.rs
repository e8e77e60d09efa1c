pub mod pod;
pub mod secret;
pub mod service;
pub mod storage;
