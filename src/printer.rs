//! Scoped print action over a shared document tree.
//!
//! Printing mutates the host document: the print container is attached,
//! the platform print facility runs, and the container is removed again.
//! [`Printer`] makes that sequence exclusive and [`AttachedDocument`]
//! makes the removal unconditional.

use crate::adapters::host::PrintHost;
use crate::core::document::PrintDocument;
use crate::render::{FragmentRenderer, Renderer};
use crate::{Error, Result};
use std::sync::{Mutex, TryLockError};

pub use crate::render::PRINT_CONTAINER_ID;

/// A container attached to a host, detached when released or dropped.
pub struct AttachedDocument<'h, H: PrintHost> {
    host: &'h mut H,
    node: Option<H::Node>,
}

impl<'h, H: PrintHost> AttachedDocument<'h, H> {
    /// Attaches `markup` under a new container with `container_id`.
    pub fn attach(host: &'h mut H, container_id: &str, markup: &str) -> Result<Self> {
        let node = host.attach(container_id, markup)?;
        tracing::debug!(container_id, "attached print container");
        Ok(Self {
            host,
            node: Some(node),
        })
    }

    /// Runs the host print action while the container is attached.
    pub fn print(&mut self) -> Result<()> {
        self.host.print()
    }

    /// Detaches the container, reporting a detach failure.
    pub fn release(mut self) -> Result<()> {
        match self.node.take() {
            Some(node) => self.host.detach(node),
            None => Ok(()),
        }
    }
}

impl<H: PrintHost> Drop for AttachedDocument<'_, H> {
    fn drop(&mut self) {
        if let Some(node) = self.node.take() {
            if let Err(err) = self.host.detach(node) {
                tracing::warn!(error = %err, "failed to detach print container");
            }
        }
    }
}

/// Serializes print actions against one host.
///
/// Only one print action may own the host at a time; a request made while
/// another is in flight fails with [`Error::PrintInFlight`].
pub struct Printer<H> {
    host: Mutex<H>,
}

impl<H: PrintHost> Printer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Mutex::new(host),
        }
    }

    /// Attaches `document`, prints, and detaches it again.
    ///
    /// The container is removed on every exit path, including a failed or
    /// cancelled print and a panic inside the host. A print error takes
    /// precedence over a detach error.
    pub fn print(&self, document: &PrintDocument) -> Result<()> {
        let mut host = match self.host.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                tracing::warn!(title = %document.title, "print requested while another is in flight");
                return Err(Error::PrintInFlight);
            }
            Err(TryLockError::Poisoned(poisoned)) => {
                tracing::warn!("recovering host after a panicked print action");
                poisoned.into_inner()
            }
        };

        let markup = FragmentRenderer.render(document);
        let mut attached = AttachedDocument::attach(&mut *host, PRINT_CONTAINER_ID, &markup)?;
        let printed = attached.print();
        let released = attached.release();

        match (printed, released) {
            (Err(err), released) => {
                if let Err(detach_err) = released {
                    tracing::warn!(error = %detach_err, "failed to detach print container");
                }
                tracing::warn!(error = %err, title = %document.title, "print action failed");
                Err(err)
            }
            (Ok(()), Err(err)) => {
                tracing::warn!(error = %err, "failed to detach print container");
                Err(err)
            }
            (Ok(()), Ok(())) => {
                tracing::info!(title = %document.title, "printed document");
                Ok(())
            }
        }
    }

    /// Runs `f` with shared access to the host, unless a print is in flight.
    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> Result<R> {
        match self.host.try_lock() {
            Ok(guard) => Ok(f(&*guard)),
            Err(TryLockError::WouldBlock) => Err(Error::PrintInFlight),
            Err(TryLockError::Poisoned(poisoned)) => Ok(f(&*poisoned.into_inner())),
        }
    }

    pub fn into_host(self) -> H {
        match self.host.into_inner() {
            Ok(host) => host,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
