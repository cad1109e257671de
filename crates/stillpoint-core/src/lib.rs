//! # Stillpoint Core Library
//!
//! This library provides the practice logic behind Stillpoint: the paced
//! breathing exercise and the meditation countdown. Every operation is
//! available through the `stillpoint` CLI, which is a thin presentation layer
//! over the same types.
//!
//! ## Architecture
//!
//! - **Breathing Timer**: A four-phase countdown state machine
//!   (inhale, hold, exhale, rest) advanced by `tick()`
//! - **Meditation Countdown**: Guided or custom session timer
//! - **Tick Driver**: Owns a timer on a tokio task and feeds it one tick per
//!   second, with a single cancellable interval
//! - **Practice Streak**: Consecutive days with a completed practice
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BreathingTimer`]: Breathing phase state machine
//! - [`MeditationTimer`]: Meditation session countdown
//! - [`TickDriver`]: Periodic tick source for any [`Tickable`]
//! - [`Config`]: Application configuration management

pub mod breathing;
pub mod driver;
pub mod error;
pub mod events;
pub mod meditation;
pub mod practice;
pub mod storage;

pub use breathing::{BreathPhase, BreathingState, BreathingTimer};
pub use driver::{TickDriver, Tickable, TICK_PERIOD};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use meditation::{find_guide, guides, MeditationGuide, MeditationTimer};
pub use practice::current_streak;
pub use storage::Config;
