use std::{
    future::Future,
    mem::replace,
    task::{Context, Poll},
};

use futures::{future::LocalBoxFuture, task::noop_waker_ref, FutureExt};

use crate::{logging::debug, Component};


/// Returns a component that stands in for the component produced by `future`.
///
/// The future is polled now, and again on each update and on dispose, without a waker;
/// a future that is already complete is bound immediately.
/// Until it completes, update does nothing.
/// Once it completes, update and dispose go to the produced component.
///
/// If the wrapper is disposed first, a component completed at that moment is disposed at once,
/// and otherwise the future is dropped.
pub fn async_component<C>(future: impl Future<Output = C> + 'static) -> AsyncComponent<C>
where
    C: Component + 'static,
{
    let mut this = AsyncComponent(AsyncState::Pending(future.boxed_local()));
    this.poll();
    this
}

/// Turn a function returning a future of a component into a function returning a component.
///
/// See [`async_component`].
pub fn async_constructor<A, Fut, C>(f: impl Fn(A) -> Fut) -> impl Fn(A) -> AsyncComponent<C>
where
    Fut: Future<Output = C> + 'static,
    C: Component + 'static,
{
    move |args| async_component(f(args))
}

/// Component returned by [`async_component`].
#[must_use]
pub struct AsyncComponent<C>(AsyncState<C>);

enum AsyncState<C> {
    Pending(LocalBoxFuture<'static, C>),
    Ready(C),
    Disposed,
}

impl<C> AsyncComponent<C> {
    /// Returns `true` if the component has been produced and not disposed.
    pub fn is_ready(&self) -> bool {
        matches!(self.0, AsyncState::Ready(_))
    }

    fn poll(&mut self) {
        if let AsyncState::Pending(future) = &mut self.0 {
            if let Poll::Ready(component) = future.poll_unpin(&mut Context::from_waker(noop_waker_ref())) {
                debug!("async component: ready");
                self.0 = AsyncState::Ready(component);
            }
        }
    }
}

impl<C: Component> Component for AsyncComponent<C> {
    fn update(&mut self) {
        self.poll();
        if let AsyncState::Ready(component) = &mut self.0 {
            component.update();
        }
    }
    fn dispose(&mut self) {
        self.poll();
        match replace(&mut self.0, AsyncState::Disposed) {
            AsyncState::Ready(mut component) => component.dispose(),
            AsyncState::Pending(_) => debug!("async component: dropped before ready"),
            AsyncState::Disposed => {}
        }
    }
}
