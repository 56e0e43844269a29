//! Resolution context — the per-call construction chain.
//!
//! A [`ResolutionContext`] is created for one top-level resolution and
//! threaded through every recursive resolution it triggers. Its stack of
//! [`ComponentKey`]s is what makes cycle detection and requester lookup
//! possible: each construction step pushes the identity being built and pops
//! it on the way out, so at any instant the stack reads as the chain of
//! components currently under construction.

use rabita_support::rendering::render_chain;
use tracing::warn;

use crate::container::Container;
use crate::error::{RabitaError, Result};
use crate::key::ComponentKey;

/// Call-scoped construction chain.
///
/// Created by the top-level entry points of [`Container`] and destroyed when
/// they return. The stack always holds at least one entry — the identity of
/// the original requester, or the `Unspecified` sentinel — for the whole
/// resolution.
pub struct ResolutionContext<'c> {
    container: &'c Container<'c>,
    stack: Vec<ComponentKey>,
}

impl<'c> ResolutionContext<'c> {
    /// Creates a context seeded with the identity requesting the resolution.
    pub fn new(container: &'c Container<'c>, requester: ComponentKey) -> Self {
        Self {
            container,
            stack: vec![requester],
        }
    }

    /// The container this resolution started on.
    ///
    /// Function factories use this for nested resolutions:
    ///
    /// ```rust,ignore
    /// .to_function(|ctx| {
    ///     let dep = ctx.container().get_with::<Dep>(ctx)?;
    ///     Ok(Arc::new(Service { dep }))
    /// })
    /// ```
    #[inline]
    pub fn container(&self) -> &'c Container<'c> {
        self.container
    }

    /// The identity one level below the component currently under
    /// construction — "who asked for me".
    ///
    /// # Errors
    /// [`RabitaError::InvalidOperation`] when the stack holds fewer than two
    /// entries (nothing requested the current top-level resolution).
    pub fn requester(&self) -> Result<&ComponentKey> {
        if self.stack.len() < 2 {
            return Err(RabitaError::InvalidOperation(
                "no requester: the resolution stack holds fewer than two entries",
            ));
        }
        Ok(&self.stack[self.stack.len() - 2])
    }

    /// The chain of components currently under construction, outermost first.
    #[inline]
    pub fn stack(&self) -> &[ComponentKey] {
        &self.stack
    }

    pub(crate) fn push(&mut self, key: ComponentKey) {
        self.stack.push(key);
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
    }
}

/// Scope guard bracketing one construction step.
///
/// Pushes the identity on creation and pops it on drop, so the pop runs on
/// every exit path, including factory errors and cycle failures.
pub(crate) struct StackFrame<'a, 'c> {
    ctx: &'a mut ResolutionContext<'c>,
}

impl<'a, 'c> StackFrame<'a, 'c> {
    pub(crate) fn push(ctx: &'a mut ResolutionContext<'c>, key: ComponentKey) -> Self {
        ctx.push(key);
        Self { ctx }
    }

    /// Scans the stack below the entry just pushed for the same identity.
    pub(crate) fn ensure_no_cycle(&self) -> Result<()> {
        let stack = self.ctx.stack();
        let Some((current, previous)) = stack.split_last() else {
            return Ok(());
        };
        if previous.contains(current) {
            let chain = render_chain(&stack.iter().map(|k| k.name()).collect::<Vec<_>>());
            warn!(%chain, "circular dependency detected");
            return Err(RabitaError::CircularDependency(current.clone()));
        }
        Ok(())
    }

    pub(crate) fn context(&mut self) -> &mut ResolutionContext<'c> {
        self.ctx
    }
}

impl Drop for StackFrame<'_, '_> {
    fn drop(&mut self) {
        self.ctx.pop();
    }
}
