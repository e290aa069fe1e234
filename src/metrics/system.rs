//! sysinfo-backed memory source.
//!
//! Available behind the `system` feature. Embedders that already expose
//! their own heap accounting should implement
//! [`MemorySource`](crate::metrics::MemorySource) directly instead.

use std::sync::Mutex;

use sysinfo::System;

use crate::error::MetricError;
use crate::metrics::{HeapUsage, MemorySource};

/// [`MemorySource`] reading live figures from the operating system.
///
/// Reports system memory: `total` and `max` are the installed RAM, `free`
/// is what the OS considers available. Refreshed on every read, which is a
/// handful of syscalls and well within a once-per-second cadence.
pub struct SystemMemory {
    system: Mutex<System>,
}

impl SystemMemory {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SystemMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource for SystemMemory {
    fn heap(&self) -> Result<HeapUsage, MetricError> {
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            // A panic mid-refresh leaves no partial state we care about.
            Err(poisoned) => poisoned.into_inner(),
        };
        system.refresh_memory();

        let total = system.total_memory();
        Ok(HeapUsage {
            free: system.available_memory(),
            total,
            max: total,
        })
    }
}
