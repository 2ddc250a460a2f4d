//! Terminal restore guard.

use tracing::debug;

/// Runs a restore action when dropped.
///
/// Created right after raw mode is enabled, so every exit path
/// after that point, including early `?` returns during setup,
/// puts the terminal back.
pub struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            debug!("Restoring terminal");
            restore();
        }
    }
}
