//! Document trees that print containers are attached to.

mod memory;

use crate::Result;

pub use memory::{MemoryPage, NodeId};

/// A shared document tree plus the platform print facility behind it.
///
/// The print path attaches one container, prints, and detaches it again;
/// see [`crate::Printer`] for the guarantees around that sequence.
pub trait PrintHost {
    /// Handle to an attached container.
    type Node;

    /// Appends a container element with `container_id` holding `markup`.
    fn attach(&mut self, container_id: &str, markup: &str) -> Result<Self::Node>;

    /// Removes a previously attached container.
    fn detach(&mut self, node: Self::Node) -> Result<()>;

    /// Runs the print action over the current document.
    fn print(&mut self) -> Result<()>;
}
