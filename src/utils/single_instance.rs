//! Single instance enforcement
//!
//! A second copy of the application would fight the first over the global
//! shortcut, so startup takes a per-session named mutex on Windows.

use crate::error::Result;

#[cfg(windows)]
use windows::Win32::Foundation::{CloseHandle, ERROR_ALREADY_EXISTS, GetLastError, HANDLE};
#[cfg(windows)]
use windows::Win32::System::Threading::CreateMutexW;

/// Name of the lock object, scoped to the login session
#[cfg(windows)]
const MUTEX_NAME: &str = "Local\\IconPicker_SingleInstance_Mutex";

/// Held for the lifetime of the process; releases the lock on drop
#[cfg(windows)]
pub struct SingleInstanceGuard {
    mutex_handle: HANDLE,
}

#[cfg(windows)]
impl SingleInstanceGuard {
    /// Take the lock, failing with `AlreadyRunning` if another instance holds it
    #[expect(unsafe_code, reason = "Windows FFI for the named mutex")]
    pub fn new() -> Result<Self> {
        use crate::error::IconPickerError;
        use tracing::{debug, warn};
        use windows::core::HSTRING;

        let name = HSTRING::from(MUTEX_NAME);

        // SAFETY: `name` outlives the call; the returned handle is owned by the guard
        unsafe {
            let mutex_handle = CreateMutexW(None, true, &name)?;
            if GetLastError() == ERROR_ALREADY_EXISTS {
                warn!("Single instance mutex already exists");
                let _ = CloseHandle(mutex_handle);
                return Err(IconPickerError::AlreadyRunning);
            }
            debug!("Single instance mutex created");
            Ok(Self { mutex_handle })
        }
    }
}

#[cfg(windows)]
impl Drop for SingleInstanceGuard {
    #[expect(unsafe_code, reason = "Windows FFI for mutex cleanup")]
    fn drop(&mut self) {
        // SAFETY: the handle was created by `new` and is closed exactly once
        unsafe {
            let _ = CloseHandle(self.mutex_handle);
        }
        tracing::debug!("Single instance mutex released");
    }
}

/// No-op guard; launch agents and desktop entries already start one copy
#[cfg(not(windows))]
pub struct SingleInstanceGuard;

#[cfg(not(windows))]
impl SingleInstanceGuard {
    /// Always succeeds
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}
