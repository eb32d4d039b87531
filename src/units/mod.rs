//! 단위 정의 및 변환 모듈 모음.

pub mod velocity;

pub use velocity::{convert_velocity, VelocityUnit};
