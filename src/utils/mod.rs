// Utils compartidos

pub mod constants;
pub mod dates;
pub mod events;
pub mod jwt;
pub mod storage;
