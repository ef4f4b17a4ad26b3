#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for `IconPicker` unit tests.
//!
//! In-memory stand-ins for the OS hotkey hook, the popup window and the login
//! item. Each fake is cheaply clonable and clones share state, so a test keeps
//! one clone as a probe after handing the other to the code under test.

use crate::error::{IconPickerError, Result, StringError};
use crate::ipc::IpcResponse;
use crate::shortcut::{BackendError, HotkeyBackend};
use crate::utils::autostart::LoginItem;
use crate::window::{PopupSurface, SurfaceFactory, SurfaceOptions};
use global_hotkey::hotkey::HotKey;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

#[derive(Debug, Default)]
struct HotkeyTable {
    registered: BTreeSet<u32>,
    claimed_elsewhere: BTreeSet<u32>,
    calls: usize,
}

/// Hotkey hook where some combinations are owned by "another process"
#[derive(Debug, Clone, Default)]
pub struct FakeHotkeys(Rc<RefCell<HotkeyTable>>);

impl FakeHotkeys {
    /// Hook on which `hotkeys` always fail to register
    pub fn claimed_elsewhere(hotkeys: &[HotKey]) -> Self {
        let fake = Self::default();
        for hotkey in hotkeys {
            fake.set_claimed_elsewhere(*hotkey, true);
        }
        fake
    }

    /// Mark or unmark `hotkey` as owned by another process
    pub fn set_claimed_elsewhere(&self, hotkey: HotKey, claimed: bool) {
        let mut table = self.0.borrow_mut();
        if claimed {
            table.claimed_elsewhere.insert(hotkey.id());
        } else {
            table.claimed_elsewhere.remove(&hotkey.id());
        }
    }

    /// Ids currently registered by this process, ascending
    pub fn registered(&self) -> Vec<u32> {
        self.0.borrow().registered.iter().copied().collect()
    }

    /// Number of register/unregister calls so far
    pub fn calls(&self) -> usize {
        self.0.borrow().calls
    }
}

impl HotkeyBackend for FakeHotkeys {
    fn register(&mut self, hotkey: HotKey) -> std::result::Result<(), BackendError> {
        let mut table = self.0.borrow_mut();
        table.calls += 1;
        if table.claimed_elsewhere.contains(&hotkey.id()) {
            return Err(StringError::new("hotkey already registered by another process"));
        }
        if !table.registered.insert(hotkey.id()) {
            return Err(StringError::new("hotkey already registered"));
        }
        Ok(())
    }

    fn unregister(&mut self, hotkey: HotKey) -> std::result::Result<(), BackendError> {
        let mut table = self.0.borrow_mut();
        table.calls += 1;
        if table.registered.remove(&hotkey.id()) {
            Ok(())
        } else {
            Err(StringError::new("hotkey not registered"))
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SurfaceRecord {
    visible: bool,
    focused: bool,
    destroyed: bool,
}

#[derive(Debug)]
struct SurfaceLog {
    surfaces: Vec<SurfaceRecord>,
    last_options: Option<SurfaceOptions>,
    delivered: Vec<IpcResponse>,
    grant_focus_on_show: bool,
    fail_next_create: bool,
}

impl Default for SurfaceLog {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            last_options: None,
            delivered: Vec::new(),
            grant_focus_on_show: true,
            fail_next_create: false,
        }
    }
}

/// Factory of in-memory popup surfaces
#[derive(Debug, Clone, Default)]
pub struct FakeSurfaces(Rc<RefCell<SurfaceLog>>);

impl FakeSurfaces {
    /// Total surfaces ever created
    pub fn created(&self) -> usize {
        self.0.borrow().surfaces.len()
    }

    /// Surfaces created and not destroyed
    pub fn live(&self) -> usize {
        self.0.borrow().surfaces.iter().filter(|s| !s.destroyed).count()
    }

    /// Options passed to the most recent `create`
    pub fn last_options(&self) -> Option<SurfaceOptions> {
        self.0.borrow().last_options
    }

    /// Responses delivered to any surface
    pub fn delivered(&self) -> Vec<IpcResponse> {
        self.0.borrow().delivered.clone()
    }

    /// Whether the newest surface holds focus
    pub fn is_focused(&self) -> bool {
        self.0.borrow().surfaces.last().is_some_and(|s| s.focused)
    }

    /// Whether the newest surface is shown and not destroyed
    pub fn is_visible(&self) -> bool {
        self.0
            .borrow()
            .surfaces
            .last()
            .is_some_and(|s| s.visible && !s.destroyed)
    }

    /// Simulate the user closing the newest surface through the OS
    pub fn close_from_os(&self) {
        if let Some(record) = self.0.borrow_mut().surfaces.last_mut() {
            record.destroyed = true;
            record.visible = false;
            record.focused = false;
        }
    }

    /// Move focus to or away from the newest surface
    pub fn set_focus(&self, focused: bool) {
        if let Some(record) = self.0.borrow_mut().surfaces.last_mut() {
            record.focused = focused;
        }
    }

    /// Whether `focus()` actually grants focus (some window managers refuse)
    pub fn grant_focus_on_show(&self, grant: bool) {
        self.0.borrow_mut().grant_focus_on_show = grant;
    }

    /// Make the next `create` fail
    pub fn fail_next_create(&self) {
        self.0.borrow_mut().fail_next_create = true;
    }
}

/// Surface handed out by [`FakeSurfaces`]
#[derive(Debug)]
pub struct FakeSurface {
    index: usize,
    log: Rc<RefCell<SurfaceLog>>,
}

impl FakeSurface {
    fn record(&self) -> SurfaceRecord {
        self.log.borrow().surfaces[self.index]
    }

    fn update(&self, f: impl FnOnce(&mut SurfaceRecord)) {
        f(&mut self.log.borrow_mut().surfaces[self.index]);
    }
}

impl PopupSurface for FakeSurface {
    fn is_destroyed(&self) -> bool {
        self.record().destroyed
    }

    fn is_visible(&self) -> bool {
        self.record().visible
    }

    fn has_focus(&self) -> bool {
        self.record().focused
    }

    fn show(&mut self) -> Result<()> {
        self.update(|record| record.visible = true);
        Ok(())
    }

    fn hide(&mut self) -> Result<()> {
        self.update(|record| {
            record.visible = false;
            record.focused = false;
        });
        Ok(())
    }

    fn focus(&mut self) {
        let grant = self.log.borrow().grant_focus_on_show;
        self.update(|record| record.focused = grant);
    }

    fn deliver(&mut self, response: &IpcResponse) {
        self.log.borrow_mut().delivered.push(response.clone());
    }
}

impl SurfaceFactory for FakeSurfaces {
    type Surface = FakeSurface;

    fn create(&mut self, options: &SurfaceOptions) -> Result<FakeSurface> {
        let mut log = self.0.borrow_mut();
        if std::mem::take(&mut log.fail_next_create) {
            return Err(IconPickerError::WindowError(StringError::new(
                "window creation refused",
            )));
        }
        assert!(
            log.surfaces.iter().all(|s| s.destroyed),
            "a second popup surface was created while one is live"
        );
        log.last_options = Some(*options);
        log.surfaces.push(SurfaceRecord::default());
        Ok(FakeSurface {
            index: log.surfaces.len() - 1,
            log: Rc::clone(&self.0),
        })
    }
}

/// Login item backed by a flag
#[derive(Debug, Clone, Default)]
pub struct FakeLoginItem(Rc<RefCell<(bool, bool)>>);

impl FakeLoginItem {
    /// Current flag value
    pub fn enabled(&self) -> bool {
        self.0.borrow().0
    }

    /// Make every future write fail
    pub fn fail_writes(&self) {
        self.0.borrow_mut().1 = true;
    }
}

impl LoginItem for FakeLoginItem {
    fn is_enabled(&self) -> Result<bool> {
        Ok(self.0.borrow().0)
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        let mut state = self.0.borrow_mut();
        if state.1 {
            return Err(IconPickerError::AutoStartError(StringError::new(
                "login items are locked",
            )));
        }
        state.0 = enabled;
        Ok(())
    }
}

#[test]
fn fake_surfaces_track_visibility() {
    let surfaces = FakeSurfaces::default();
    let mut factory = surfaces.clone();
    let mut surface = factory.create(&crate::window::POPUP_OPTIONS).unwrap();
    surface.show().unwrap();
    assert!(surfaces.is_visible());
}
