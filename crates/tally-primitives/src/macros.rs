///
/// category_enum
///
/// Declare a closed category enumeration together with its `Category`
/// implementation. Variants are listed in ordinal order, each paired with
/// its display name.
///

#[macro_export]
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Category for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Category::name(*self))
            }
        }
    };
}
