// src/exec/action.rs

//! The action abstraction: something a task does when performed.

use std::future::Future;
use std::pin::Pin;

/// Future returned by [`Action::call`].
pub type ActionFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// Behaviour attached to a task.
///
/// An action is called with the argument list given to `perform` and reports
/// success or a descriptive failure. Production code uses
/// [`ShellAction`](crate::exec::ShellAction); tests and embedding programs
/// can pass any async closure:
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use gofer::exec::Action;
///
/// let action: Arc<dyn Action> = Arc::new(|args: Vec<String>| async move {
///     println!("called with {args:?}");
///     anyhow::Ok(())
/// });
/// ```
pub trait Action: Send + Sync {
    fn call<'a>(&'a self, args: &'a [String]) -> ActionFuture<'a>;
}

impl<F, Fut> Action for F
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn call<'a>(&'a self, args: &'a [String]) -> ActionFuture<'a> {
        Box::pin((self)(args.to_vec()))
    }
}
