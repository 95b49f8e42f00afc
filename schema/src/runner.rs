use futures::Future;

use crate::Allocator;

/// A `Runner` feeds a fleet and its pending locations to an `Allocator`.
/// It returns a `Response` future which resolves once the allocation has finished
/// or has been abandoned.
pub trait Runner<A: Allocator> {
    type Response: Future<Output = Result<Self::Success, Self::Error>>;
    type Success;
    type Error;

    /// Run an allocation using the provided `Allocator`.
    fn run(&self, allocator: A) -> Self::Response;
}
