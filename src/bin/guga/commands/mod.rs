pub mod decode;
pub mod encode;
pub mod lang;
pub mod table;
