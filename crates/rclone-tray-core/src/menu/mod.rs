mod actions;
mod model;

pub use {
    actions::{ConfirmQuitAction, EmitAction, RestoreWindowAction},
    model::{Menu, MenuAction, MenuEntry, MenuItem},
};
