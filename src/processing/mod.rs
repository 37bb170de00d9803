//! Resume text processing: normalization, segmentation and field extraction

pub mod normalizer;
pub mod sections;
pub mod blocks;
pub mod contact;
pub mod skills;
pub mod experience;
pub mod education;
pub mod summary;
