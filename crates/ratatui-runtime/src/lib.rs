//! A small frame-loop runtime on top of `ratatui` and `crossterm`.
//!
//! [`Runtime`] owns the terminal and an event loop producing three kinds of
//! events: ticks carrying the time elapsed since the previous tick, render
//! requests paced by a [`RenderMode`], and terminal input. Applications
//! implement [`App`], usually through a [`ScreenStack`] of [`Screen`]s.

pub use self::{
    app::App,
    event_loop::RenderMode,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
