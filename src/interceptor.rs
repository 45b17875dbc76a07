//! Method-interception hook invoked around bound native calls.
//!
//! The dispatch layer (outside this crate) invokes the interceptor with the
//! actual invocation as a thunk; the interceptor may observe the call - for
//! instance to log script-initiated invocations - and must return the
//! invocation's result.

use modelbind_core::{BindError, Native};

/// Hook around a bound native method call.
pub trait MethodInterceptor: Send + Sync {
    /// Run the invocation, observing it as needed. `method_name` is the native
    /// name of the method being called.
    fn intercept(
        &self,
        invoke: &mut dyn FnMut() -> Result<Native, BindError>,
        method_name: &str,
    ) -> Result<Native, BindError>;
}

/// Default interceptor: invokes the method with no observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughInterceptor;

impl MethodInterceptor for PassthroughInterceptor {
    fn intercept(
        &self,
        invoke: &mut dyn FnMut() -> Result<Native, BindError>,
        _method_name: &str,
    ) -> Result<Native, BindError> {
        invoke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn passthrough_returns_invocation_result() {
        let interceptor = PassthroughInterceptor;
        let result = interceptor.intercept(&mut || Ok(Native::Int(5)), "compute");
        assert_eq!(result.unwrap(), Native::Int(5));
    }

    #[test]
    fn interceptor_observes_calls() {
        struct Counting(AtomicUsize);

        impl MethodInterceptor for Counting {
            fn intercept(
                &self,
                invoke: &mut dyn FnMut() -> Result<Native, BindError>,
                _method_name: &str,
            ) -> Result<Native, BindError> {
                self.0.fetch_add(1, Ordering::Relaxed);
                invoke()
            }
        }

        let interceptor = Counting(AtomicUsize::new(0));
        interceptor
            .intercept(&mut || Ok(Native::Null), "first")
            .unwrap();
        interceptor
            .intercept(&mut || Ok(Native::Null), "second")
            .unwrap();
        assert_eq!(interceptor.0.load(Ordering::Relaxed), 2);
    }
}
