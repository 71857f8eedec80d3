pub mod builtin;
pub mod http;
pub mod json;

pub use builtin::BuiltinSource;
pub use http::HttpSource;
pub use json::JsonFileSource;
