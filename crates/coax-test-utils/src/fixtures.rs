//! Instrumented converter wrappers.
//!
//! - [`CountingConverter`] — forwards to an inner converter and counts calls.
//! - [`FailingConverter`] — forwards a fixed number of calls, then fails.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use coax_core::{ConversionError, TypeDesc, Value, ValueConverter};

/// Forwards every call to `inner` and records how often each direction ran.
///
/// Useful for checking that null elements never reach the element
/// converter. Counters are atomic so the wrapper stays `Sync`.
pub struct CountingConverter {
    inner: Arc<dyn ValueConverter>,
    forward_calls: AtomicUsize,
    backward_calls: AtomicUsize,
}

impl CountingConverter {
    pub fn new(inner: Arc<dyn ValueConverter>) -> Self {
        Self {
            inner,
            forward_calls: AtomicUsize::new(0),
            backward_calls: AtomicUsize::new(0),
        }
    }

    /// How many times `to_provider()` has been called.
    pub fn forward_calls(&self) -> usize {
        self.forward_calls.load(Ordering::Relaxed)
    }

    /// How many times `from_provider()` has been called.
    pub fn backward_calls(&self) -> usize {
        self.backward_calls.load(Ordering::Relaxed)
    }
}

impl ValueConverter for CountingConverter {
    fn model_type(&self) -> &TypeDesc {
        self.inner.model_type()
    }

    fn provider_type(&self) -> &TypeDesc {
        self.inner.provider_type()
    }

    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.forward_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.to_provider(value)
    }

    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.backward_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.from_provider(value)
    }
}

/// Fails deterministically after a configurable number of successful calls.
///
/// Both directions share one counter. Useful for checking that a failing
/// element aborts the container conversion and that no later element is
/// visited.
pub struct FailingConverter {
    inner: Arc<dyn ValueConverter>,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingConverter {
    /// Create a converter that succeeds `succeed_count` times then fails.
    pub fn new(inner: Arc<dyn ValueConverter>, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times either direction has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), ConversionError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(ConversionError::InvalidValue {
                reason: format!(
                    "deliberate failure after {} successful calls",
                    self.succeed_count
                ),
            });
        }
        Ok(())
    }
}

impl ValueConverter for FailingConverter {
    fn model_type(&self) -> &TypeDesc {
        self.inner.model_type()
    }

    fn provider_type(&self) -> &TypeDesc {
        self.inner.provider_type()
    }

    fn to_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.check()?;
        self.inner.to_provider(value)
    }

    fn from_provider(&self, value: &Value) -> Result<Value, ConversionError> {
        self.check()?;
        self.inner.from_provider(value)
    }
}
