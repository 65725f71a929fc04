//! Injected GPU copy callback.

use ffx_core::{CommandList, Resource};

/// Records a texture copy into a command list.
///
/// Called as `(command_list, destination, source)`. The callback must handle
/// copies between resources of different pixel formats (for example with a
/// compute blit); the `state` of each view is the state the resource is in
/// when the copy is recorded.
pub type CopyTextureFn = Box<dyn FnMut(CommandList, &Resource, &Resource)>;
