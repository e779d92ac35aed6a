//! Per-frame ordering via `SystemSet` phases.
//!
//! ```text
//! Input  →  Advance  →  Present
//! ```
//!
//! * **Input** – decode device events into `PendingCameraCommands`.
//! * **Advance** – `advance_world`: drain commands, scroll the world, step the
//!   bouncers. Exactly one system lives here, so the offset snapshot every
//!   consumer sees is the one it leaves behind.
//! * **Present** – read-only consumers (terrain tiles, bouncer meshes, camera
//!   transform). They must not mutate `WorldSession`.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Advance,
    Present,
}
