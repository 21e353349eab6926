//! Pointer interaction controller for a 3D-capable map view.
//!
//! This crate turns raw mouse and wheel input into camera changes: dragging
//! pans the map, dragging with Meta held orbits the camera (roll/pitch), and
//! the wheel zooms. It is compiled to WebAssembly next to the renderer and
//! talks to it only through the [`view::MapView`] and [`geo::Projection`]
//! traits, so the whole state machine runs and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::InteractionCore`], the event handlers and their actions |
//! | [`input`] | Modifier keys, wheel deltas, and the drag state machine |
//! | [`geo`] | Screen/meter/geographic points and the Web Mercator projection |
//! | [`view`] | The view/camera collaborator trait and an in-memory scene view |
//! | [`config`] | Drag and wheel sensitivities, loadable from JSON |
//! | [`dom`] | Browser event wiring: attach to a canvas, detach on drop |
//! | [`consts`] | Shared numeric constants (sensitivities, earth radius, tile size) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod geo;
pub mod input;
pub mod view;
