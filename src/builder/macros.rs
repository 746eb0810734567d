//! Macros for ergonomic event declaration.

/// Declare a plain event enum that is its own identity.
///
/// The enum derives `Copy`, `Ord`, `Hash`, `Debug` and serde, implements
/// [`Event`](crate::core::Event) with `Id = Self`, and gains a `name()`
/// method returning the variant name. The serde derives resolve through
/// this crate, so callers need no direct `serde` dependency.
///
/// # Example
///
/// ```
/// use mealy::core::Event;
/// use mealy::event_enum;
///
/// event_enum! {
///     pub enum DialogEvent {
///         Invite,
///         InviteAccept,
///         Bye,
///     }
/// }
///
/// assert_eq!(DialogEvent::Invite.id(), DialogEvent::Invite);
/// assert_eq!(DialogEvent::Bye.name(), "Bye");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
            $crate::__private::serde::Serialize, $crate::__private::serde::Deserialize
        )]
        #[serde(crate = "mealy::__private::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name, for logs and diagnostics.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Event for $name {
            type Id = $name;

            fn id(&self) -> $name {
                *self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Event;

    event_enum! {
        enum TestEvent {
            Invite,
            Provisional,
            Bye,
        }
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Invite.id(), TestEvent::Invite);
        assert_eq!(TestEvent::Provisional.name(), "Provisional");
        assert!(TestEvent::Invite < TestEvent::Bye);
    }

    #[test]
    fn event_enum_supports_visibility() {
        event_enum! {
            pub enum PublicEvent {
                A,
                B,
            }
        }

        assert_eq!(PublicEvent::B.id(), PublicEvent::B);
    }

    mod shadowed {
        // A local `serde` hides the extern crate from the expansion.
        #[allow(dead_code)]
        mod serde {}

        event_enum! {
            pub enum RemoteEvent {
                Ring,
                Hangup,
            }
        }
    }

    #[test]
    fn event_enum_derives_without_serde_in_scope() {
        use shadowed::RemoteEvent;

        let json = serde_json::to_string(&RemoteEvent::Hangup).unwrap();
        assert_eq!(json, "\"Hangup\"");
        let back: RemoteEvent = serde_json::from_str("\"Ring\"").unwrap();
        assert_eq!(back.id(), RemoteEvent::Ring);
    }

    #[test]
    fn event_enum_serializes_by_name() {
        let json = serde_json::to_string(&TestEvent::Bye).unwrap();
        assert_eq!(json, "\"Bye\"");
    }
}
