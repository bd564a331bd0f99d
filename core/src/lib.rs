//! # Seaside Core
//!
//! Core traits and types for the Seaside Suites site architecture.
//!
//! Every interactive feature of the site (the booking wizard, the concierge
//! chat, the page shell) is a **reducer**: a pure function
//! `(State, Action, Environment) → (State, Effects)`. This crate provides the
//! fundamental abstractions; the `seaside-runtime` crate executes them.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible inputs to a reducer (user intents and timer
//!   completions)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use seaside_core::{effect::Effect, reducer::Reducer, SmallVec, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct ShellState {
//!     booking_open: bool,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum ShellAction {
//!     OpenBooking,
//!     CloseBooking,
//! }
//!
//! impl Reducer for ShellReducer {
//!     type State = ShellState;
//!     type Action = ShellAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ShellState,
//!         action: ShellAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ShellAction>; 4]> {
//!         match action {
//!             ShellAction::OpenBooking => state.booking_open = true,
//!             ShellAction::CloseBooking => state.booking_open = false,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, NaiveDate, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable. A
/// reducer must never perform I/O directly; anything asynchronous (here, the
/// simulated latency timers) is returned as an [`effect::Effect`] description
/// for the runtime to execute.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for BookingReducer {
    ///     type State = WizardState;
    ///     type Action = BookingAction;
    ///     type Environment = BookingEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut WizardState,
    ///         action: BookingAction,
    ///         env: &BookingEnvironment,
    ///     ) -> SmallVec<[Effect<BookingAction>; 4]> {
    ///         match action {
    ///             BookingAction::ApplyCoupon => {
    ///                 // Business logic here
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most actions here are pure
        /// state updates and return `smallvec![Effect::None]`.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime. They are
/// values (not execution) and are composable. The site's only asynchronous
/// behavior — the fixed-delay timers that simulate the availability check,
/// payment settlement, and concierge typing — is expressed as
/// [`Effect::Delay`].
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (simulated latency, scripted typing pauses)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Delay an action by the given duration
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Effect<Action> {
            Effect::Delay {
                duration,
                action: Box::new(action),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter. The site has exactly two: wall-clock time
/// (chat timestamps, member records) and confirmation-code generation.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// let clock = SystemClock;
    ///
    /// // Test - fixed time for deterministic tests
    /// let clock = FixedClock::new(some_time);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Confirmation-code generation, abstracted for deterministic tests
    ///
    /// Codes are only generated when a (simulated) payment settles, so the
    /// trait has a single operation.
    pub trait CodeGenerator: Send + Sync {
        /// Produce a fresh booking confirmation code
        fn confirmation_code(&self) -> String;
    }

    /// Production code generator: `SS-` followed by nine random characters
    /// drawn from uppercase letters and digits.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomCodes;

    impl CodeGenerator for RandomCodes {
        fn confirmation_code(&self) -> String {
            use rand::Rng;

            const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
            let mut rng = rand::thread_rng();
            let suffix: String = (0..9)
                .map(|_| {
                    let idx = rng.gen_range(0..CHARSET.len());
                    char::from(CHARSET[idx])
                })
                .collect();
            format!("SS-{suffix}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, CodeGenerator, RandomCodes, SystemClock};
    use std::time::Duration;

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn random_codes_have_booking_shape() {
        let codes = RandomCodes;
        let code = codes.confirmation_code();
        assert!(code.starts_with("SS-"));
        assert_eq!(code.len(), 12);
        assert!(
            code[3..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn random_codes_are_unlikely_to_collide() {
        let codes = RandomCodes;
        let a = codes.confirmation_code();
        let b = codes.confirmation_code();
        assert_ne!(a, b);
    }

    #[test]
    fn delay_helper_boxes_the_action() {
        let effect: Effect<u32> = Effect::delay(Duration::from_millis(5), 7);
        match effect {
            Effect::Delay { duration, action } => {
                assert_eq!(duration, Duration::from_millis(5));
                assert_eq!(*action, 7);
            },
            other => panic!("expected Effect::Delay, got {other:?}"),
        }
    }
}
