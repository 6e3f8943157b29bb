//! Merges GraphQL SDL fragments into one schema, extends it with a
//! `DateTime` scalar and a `@restrictToSelf` directive, and prints it back
//! out as SDL.

pub mod ast;
pub mod extensions;
pub mod loc;
mod merge;
pub mod schema;
pub mod schema_printer;
pub mod sdl_collector;
mod sdl_document;
pub mod types;
mod value;

pub use merge::merge_to_file;
pub use merge::MergeError;
pub use merge::MergeSummary;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use sdl_document::ReadFragmentError;
pub use sdl_document::SdlDocument;
pub use sdl_document::SdlFragment;
pub use value::Value;
