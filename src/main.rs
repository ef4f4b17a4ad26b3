//! `IconPicker` - tray-resident icon picker
//!
//! Starts hidden in the system tray. The popup opens from a tray click, the tray
//! menu, or the global shortcut, and closes again when it loses focus.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use global_hotkey::GlobalHotKeyManager;
use gui::{PUMP_INTERVAL, Shell, SlintSurfaceFactory};
use iconpicker::app::Supervisor;
use iconpicker::config::ConfigManager;
use iconpicker::error::get_user_friendly_error;
use iconpicker::utils::{self, AutoStartManager, SingleInstanceGuard};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Startup order: logging, single-instance lock, supervisor (sweep, shortcut),
/// then the tray once the event loop runs. Only logging and the tray are fatal.
fn main() -> Result<()> {
    let _log_guard = utils::init_logging().context("Failed to initialize logging system")?;

    info!("IconPicker v{} starting...", env!("CARGO_PKG_VERSION"));

    let _single_instance_guard = match SingleInstanceGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            error!("Single instance check failed: {}", e);
            show_error_and_exit(&get_user_friendly_error(&e));
            return Err(e.into());
        }
    };

    let hotkeys = match GlobalHotKeyManager::new() {
        Ok(manager) => Some(manager),
        Err(e) => {
            warn!("Global shortcut hook unavailable: {}", e);
            None
        }
    };

    let (requests_tx, requests_rx) = mpsc::channel();
    let factory = SlintSurfaceFactory::new(requests_tx);
    let login_item =
        AutoStartManager::for_current_exe().context("Failed to locate the running executable")?;

    let supervisor = Supervisor::start(
        ConfigManager::default_location(),
        hotkeys,
        factory,
        login_item,
    );
    let shell = Rc::new(RefCell::new(Shell::new(supervisor, requests_rx)));

    // The tray must be created once the event loop is running (macOS)
    let tray_shell = Rc::clone(&shell);
    slint::Timer::single_shot(Duration::ZERO, move || {
        let installed = tray_shell.borrow_mut().install_tray();
        if let Err(e) = installed {
            error!("Failed to create tray icon: {}", e);
            tray_shell.borrow_mut().shutdown();
            show_error_and_exit(&get_user_friendly_error(&e));
        }
    });

    let pump_shell = Rc::clone(&shell);
    let pump = slint::Timer::default();
    pump.start(slint::TimerMode::Repeated, PUMP_INTERVAL, move || {
        pump_shell.borrow_mut().pump();
    });

    info!("Starting UI event loop");
    // Hiding the popup must not end the process, so run until an explicit quit
    slint::run_event_loop_until_quit().context("UI event loop terminated with error")?;

    pump.stop();
    shell.borrow_mut().shutdown();
    info!("IconPicker shutting down");

    Ok(())
}

/// Shows an error dialog and exits the application.
#[cfg(windows)]
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("IconPicker - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}

/// Shows an error dialog and exits the application (non-Windows fallback).
#[cfg(not(windows))]
fn show_error_and_exit(message: &str) {
    eprintln!("ERROR: {message}");
    std::process::exit(1);
}
