pub mod icon_gen;
pub mod manifest;
pub mod png;
pub mod shield;
