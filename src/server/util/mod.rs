pub mod parse;
pub mod password;
