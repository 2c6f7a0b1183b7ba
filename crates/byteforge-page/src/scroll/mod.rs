//! Viewport scrolling for the full-page layout
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, in-out quad)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Duration accessors over `[navigator]` settings
//!
//! ## L3 Molecular Layer
//! - `animation` - Scroll animator combining atoms, driven by the step navigator
//!
//! # Usage
//!
//! ```ignore
//! use byteforge_page::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::from_config(&config.navigator);
//! animator.scroll_to(section_offset, Instant::now());
//!
//! // In main loop, update each frame and get the current viewport offset
//! let offset = animator.update(Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{NavigatorConfig, NavigatorConfigExt};
pub use easing::{EasingType, EasingTypeExt};
