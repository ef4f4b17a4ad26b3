//! "Run at startup" login item
//!
//! On Windows the value lives under
//! `HKCU\Software\Microsoft\Windows\CurrentVersion\Run`; on macOS and Linux the
//! `auto-launch` crate manages a launch agent or an XDG autostart entry.

use crate::error::{IconPickerError, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// OS setting that starts the application at login
pub trait LoginItem {
    /// Whether the application is currently registered
    fn is_enabled(&self) -> Result<bool>;

    /// Register or unregister the application
    fn set_enabled(&mut self, enabled: bool) -> Result<()>;
}

/// Login item for this executable
#[derive(Debug, Clone)]
pub struct AutoStartManager {
    app_name: String,
    exe_path: PathBuf,
}

impl AutoStartManager {
    /// Manage the login item `app_name` pointing at `exe_path`
    pub fn new(app_name: impl Into<String>, exe_path: impl Into<PathBuf>) -> Self {
        Self {
            app_name: app_name.into(),
            exe_path: exe_path.into(),
        }
    }

    /// Manage the login item of the running executable
    pub fn for_current_exe() -> Result<Self> {
        let exe_path = std::env::current_exe()?;
        Ok(Self::new("IconPicker", exe_path))
    }

    /// Registered application name
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

#[cfg(windows)]
const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

#[cfg(windows)]
impl LoginItem for AutoStartManager {
    fn is_enabled(&self) -> Result<bool> {
        use winreg::RegKey;
        use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let run = match hkcu.open_subkey_with_flags(RUN_KEY, KEY_READ) {
            Ok(key) => key,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(IconPickerError::AutoStartError(Box::new(e))),
        };

        match run.get_value::<String, _>(&self.app_name) {
            Ok(command) => {
                debug!("Run key entry for {}: {}", self.app_name, command);
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(IconPickerError::AutoStartError(Box::new(e))),
        }
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (run, _) = hkcu
            .create_subkey(RUN_KEY)
            .map_err(|e| IconPickerError::AutoStartError(Box::new(e)))?;

        if enabled {
            // Quoted so paths with spaces survive the shell split
            let command = format!("\"{}\"", self.exe_path.display());
            run.set_value(&self.app_name, &command)
                .map_err(|e| IconPickerError::AutoStartError(Box::new(e)))?;
            info!("Enabled run at startup: {}", command);
        } else {
            match run.delete_value(&self.app_name) {
                Ok(()) => info!("Disabled run at startup"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Run at startup was already disabled");
                }
                Err(e) => return Err(IconPickerError::AutoStartError(Box::new(e))),
            }
        }
        Ok(())
    }
}

#[cfg(not(windows))]
impl AutoStartManager {
    fn launcher(&self) -> Result<auto_launch::AutoLaunch> {
        auto_launch::AutoLaunchBuilder::new()
            .set_app_name(&self.app_name)
            .set_app_path(&self.exe_path.to_string_lossy())
            .set_use_launch_agent(true)
            .build()
            .map_err(|e| IconPickerError::AutoStartError(Box::new(e)))
    }
}

#[cfg(not(windows))]
impl LoginItem for AutoStartManager {
    fn is_enabled(&self) -> Result<bool> {
        self.launcher()?
            .is_enabled()
            .map_err(|e| IconPickerError::AutoStartError(Box::new(e)))
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        let launcher = self.launcher()?;
        let outcome = if enabled {
            launcher.enable()
        } else {
            launcher.disable()
        };
        outcome.map_err(|e| IconPickerError::AutoStartError(Box::new(e)))?;
        info!(
            "{} run at startup for {}",
            if enabled { "Enabled" } else { "Disabled" },
            self.exe_path.display()
        );
        Ok(())
    }
}
