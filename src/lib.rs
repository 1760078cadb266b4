pub mod anchor;
pub mod content;
pub mod effects;
pub mod entrance;
pub mod nav;
pub mod reveal;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(test)]
mod testing;
