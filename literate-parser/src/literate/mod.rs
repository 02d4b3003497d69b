//! Main module for literate segmentation

pub mod ast;
pub mod comments;
pub mod entities;
pub mod merging;
pub mod nodes;
pub mod segmenting;
pub mod testing;
