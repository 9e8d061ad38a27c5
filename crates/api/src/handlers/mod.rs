pub mod kite;
pub mod options;
pub mod status;
