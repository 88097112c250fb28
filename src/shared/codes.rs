/// A persisted integer outside an enum's mapping table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i32,
}

/// Declares an enum persisted as an integer.
///
/// The listed `Variant = code` pairs are the whole mapping: unknown codes are
/// rejected both by `TryFrom<i32>` and by JSON deserialization.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        $vis enum $name {
            $($variant),+
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::shared::codes::UnknownCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err($crate::shared::codes::UnknownCode {
                        kind: stringify!($name),
                        code,
                    }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                match value {
                    $($name::$variant => $code,)+
                }
            }
        }
    };
}

pub(crate) use coded_enum;
