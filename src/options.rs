//! Binding configuration handed to the dispatch layer.

use std::sync::Arc;

use modelbind_core::{NameConvention, TypeModel};

use crate::binder::{Binder, TypeSafeBinder};
use crate::interceptor::MethodInterceptor;

/// Options selecting how a host object's calls are bound.
///
/// Thin configuration: the active naming convention, the binder strategy, and
/// an optional interceptor around bound calls.
pub struct BindingOptions {
    /// Naming convention applied when reconciling member names.
    pub convention: NameConvention,
    /// The binder strategy used for marshaling call arguments.
    pub binder: Arc<dyn Binder>,
    /// Optional hook around bound native calls.
    pub interceptor: Option<Arc<dyn MethodInterceptor>>,
}

impl BindingOptions {
    /// Default option set: a [`TypeSafeBinder`] over the given type model,
    /// lower-camel-case dynamic names, no interceptor.
    pub fn type_safe(types: Arc<dyn TypeModel>) -> Self {
        let convention = NameConvention::default();
        Self {
            convention,
            binder: Arc::new(TypeSafeBinder::with_convention(types, convention)),
            interceptor: None,
        }
    }

    /// Replace the binder strategy.
    pub fn with_binder(mut self, binder: Arc<dyn Binder>) -> Self {
        self.binder = binder;
        self
    }

    /// Attach a method interceptor.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn MethodInterceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }
}
