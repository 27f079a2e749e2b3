//! An interactive portfolio: a wireframe eye of concentric shells, each
//! shell a section that unlocks after the previous one has been read.

pub mod audio;
pub mod config;
pub mod content;
pub mod error;
pub mod eye;
pub mod grain;
pub mod menu;
pub mod navigation;
pub mod overlay;
pub mod sections;
pub mod tween;
