//! Domain primitives shared by both passes.

pub mod id_map;

pub use id_map::IdMap;
