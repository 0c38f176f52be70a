//! Macro for declaring closed state sets.

/// Declare a fieldless enum and implement [`State`](crate::behavioral::state::State) for it.
///
/// Variant names double as state names. Optionally list terminal variants.
///
/// # Example
///
/// ```
/// use patternbook::state_enum;
/// use patternbook::behavioral::state::State;
///
/// state_enum! {
///     pub enum Phase {
///         Draft,
///         Review,
///         Published,
///     }
///     final: [Published]
/// }
///
/// assert_eq!(Phase::Review.name(), "Review");
/// assert!(Phase::Published.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::behavioral::state::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::behavioral::state::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::behavioral::state::State;

    state_enum! {
        enum Door {
            Open,
            Closed,
            Welded,
        }
        final: [Welded]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Door::Open.name(), "Open");
        assert!(!Door::Open.is_final());
        assert!(Door::Welded.is_final());
    }

    #[test]
    fn state_enum_lists_all_variants() {
        assert_eq!(Door::ALL, &[Door::Open, Door::Closed, Door::Welded]);
    }

    #[test]
    fn state_enum_displays_name() {
        assert_eq!(Door::Closed.to_string(), "Closed");
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum Switch {
                On,
                Off,
            }
        }

        assert!(!Switch::On.is_final());
        assert!(!Switch::Off.is_final());
    }
}
