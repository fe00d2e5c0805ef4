pub mod logging;
pub mod token;
