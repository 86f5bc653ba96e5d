//! Preview outputs for generated heightmaps: grayscale images and extruded
//! cube worlds.
#![forbid(unsafe_code)]

pub mod extrude;
pub mod render;

pub use extrude::{CubeWorld, CubeWorldLayout, snap_height};
pub use render::{PreviewError, PreviewImage, render};
