pub mod actions;
pub mod bindings;
