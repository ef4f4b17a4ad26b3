//! Singleton popup window
//!
//! The [`WindowController`] owns at most one [`PopupSurface`]. The surface is
//! created lazily by a [`SurfaceFactory`] on the first reveal, hidden (never
//! destroyed) on toggle-off or focus loss, and only goes away when the user
//! closes it through the OS. Every operation checks liveness first, so a closed
//! surface is indistinguishable from no surface at all.

pub mod controller;
pub mod surface;

pub use controller::WindowController;
pub use surface::{POPUP_OPTIONS, PopupSurface, SurfaceFactory, SurfaceOptions};
