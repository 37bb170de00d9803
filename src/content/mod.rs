//! The persisted content document: model, assembly, merging and storage

pub mod model;
pub mod assembler;
pub mod portfolio;
pub mod merge;
pub mod store;

pub use merge::{merge, ContentPatch, MergeOutcome, Patch, SitePatch};
pub use model::ContentDocument;
pub use store::ContentStore;
