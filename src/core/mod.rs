pub mod journal;
pub mod parser;
pub mod profile;
pub mod serializer;
pub mod sync;
pub mod timeline;
