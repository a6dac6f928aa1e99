//! Macros for declaring state trees.

/// Declare a `Copy` enum and implement [`State`](crate::core::State) for it.
///
/// Each variant may name its super-state after a colon. Variants without one
/// are roots. The generated states use `()` as their context and run no
/// hooks; implement `State` by hand when enter or exit behavior is needed.
///
/// # Example
///
/// ```
/// use nested_state::core::State;
/// use nested_state::state_tree;
///
/// state_tree! {
///     pub enum Engine {
///         Stopped,
///         Starting,
///         Igniting: Starting,
///         Cranking: Starting,
///         Running,
///     }
/// }
///
/// assert_eq!(Engine::Cranking.super_state(), Some(Engine::Starting));
/// assert_eq!(Engine::Running.super_state(), None);
/// assert_eq!(Engine::Igniting.name(), "Igniting");
/// ```
#[macro_export]
macro_rules! state_tree {
    (@super) => {
        None
    };
    (@super $super:ident) => {
        Some(Self::$super)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(: $super:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            type Context = ();

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn super_state(&self) -> Option<Self> {
                match self {
                    $(Self::$variant => $crate::state_tree!(@super $($super)?)),*
                }
            }
        }
    };
}
