mod click;
mod collaborators;
mod tray_controller;
mod tray_state;

pub use {
    click::RestoreOnPrimaryClick, collaborators::TrayCollaborators,
    tray_controller::TrayController, tray_state::TrayState,
};
