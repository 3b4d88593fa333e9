pub mod avatar;
pub mod parse;
pub mod password;
