//! Small fixed-size linear algebra for 2D transforms.

pub mod num;
pub mod vector;
pub mod matrix;

pub mod prelude {
    pub use crate::{
        num::Num32,
        vector::{V2, V2i, V2f, V3, V3i, V3f},
        matrix::{Mat3, Mat3f},
    };
}
