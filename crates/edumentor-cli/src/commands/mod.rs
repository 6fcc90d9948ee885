pub mod assess;
pub mod init;
pub mod path;
pub mod serve;
pub mod subjects;
pub mod validate;
