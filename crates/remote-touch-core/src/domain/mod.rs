//! Domain entities for Remote Touch.
//!
//! This module contains pure input-translation logic with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, network libraries, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the domain answers one question: *given what the finger did on the
//! local screen, where should the remote cursor go, and should we tell the
//! remote host right now?*
//!
//! Code in outer layers (the client's application and infrastructure layers)
//! depends on the domain, but the domain never depends on them.

/// Points, sizes, and vectors in local view space plus the normalized remote space.
pub mod geometry;

/// Touch-point ⇄ normalized-coordinate conversions.
pub mod mapping;

/// Per-channel rate limiting of move and scroll samples.
pub mod throttle;

/// Pan/zoom state of the local video viewport.
pub mod view_transform;
