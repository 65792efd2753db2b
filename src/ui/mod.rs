//! egui host layer: paints the content layer's blocks, navigation, and
//! charts. Holds no figures of its own.

pub mod blocks;
pub mod panels;
pub mod plot;
