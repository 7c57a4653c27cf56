//! A minimal reactive runtime for tree-shaped component graphs, without virtual DOM diffing.
//!
//! A [`Component`] has two operations: [`update`](Component::update), which re-polls the world
//! and applies incremental changes, and [`dispose`](Component::dispose), which releases resources.
//! Components are built from smaller components and from [`Param`]s,
//! which are either constant values or functions reading a live value.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use repoll::{changes, Component, EffectComponent, Effect, Param};
//!
//! let count = Rc::new(Cell::new(0));
//! let c = count.clone();
//! let label = Param::mapping(move || format!("count: {}", c.get()));
//!
//! let mut root = EffectComponent::new(changes(label, |text| println!("{text}")), Effect::noop());
//! count.set(1);
//! root.update(); // prints "count: 1"
//! root.update(); // nothing changed, prints nothing
//! root.dispose();
//! ```
//!
//! There is no runtime, scheduler or global registry: the driver calls `update` on the root component
//! at whatever cadence it chooses, and `dispose` once at teardown.
mod async_component;
mod component;
mod effect;
mod hooks;
mod logging;
mod param;
mod state;
mod stream;
mod transition;

#[cfg(test)]
mod utils;

pub use async_component::*;
pub use component::*;
pub use effect::*;
pub use hooks::*;
pub use param::*;
pub use state::*;
pub use stream::*;
pub use transition::*;
