//! macros used by palettecss

/// declare the theme tokens
///
/// generates the [`Token`](crate::theme::Token) enum and the
/// [`Theme`](crate::theme::Theme) struct from one table, so the field order,
/// wire names and defaults can't drift apart
#[macro_export]
macro_rules! theme_tokens {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $field:ident {
                name: $wire:literal,
                group: $group:ident,
                default: $default:literal $(,)?
            }
        ),* $(,)?
    ) => {
        /// a single named value within a [`Theme`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Token {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl Token {
            /// every token, in declaration order
            pub const ALL: &'static [Token] = &[$( Token::$variant, )*];

            /// the camelCase name used in exports and assignments
            pub const fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }

            /// the editor group this token is listed under
            pub const fn group(&self) -> TokenGroup {
                match self {
                    $( Self::$variant => TokenGroup::$group, )*
                }
            }

            /// the documented default value of this token
            pub const fn default_value(&self) -> &'static str {
                match self {
                    $( Self::$variant => $default, )*
                }
            }
        }

        /// a complete set of theme tokens
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Theme {
            $(
                $(#[$meta])*
                pub $field: String,
            )*
        }

        impl Theme {
            /// get the value of a token
            pub fn get(&self, token: Token) -> &str {
                match token {
                    $( Token::$variant => &self.$field, )*
                }
            }

            /// get the slot holding the value of a token
            fn slot_mut(&mut self, token: Token) -> &mut String {
                match token {
                    $( Token::$variant => &mut self.$field, )*
                }
            }
        }

        impl Default for Theme {
            fn default() -> Self {
                Self {
                    $( $field: $default.to_string(), )*
                }
            }
        }
    };
}

/// run `$a` if the given bool setting is on
///
/// # Example
///
/// ```ignore
/// opt_and!(logging.enable, logging::setup()?);
/// ```
#[macro_export]
macro_rules! opt_and {
    ($field:ident, $a:expr) => {
        if $crate::getopt!($field) {
            $a
        }
    };

    ($lvl1:ident . $field:ident, $a:expr) => {
        if $crate::getopt!($lvl1.$field) {
            $a
        }
    };
}

/// helper macro for generating validators
#[macro_export]
macro_rules! validator {
    ($struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// helper macro for nested validation
#[macro_export]
macro_rules! validator_nested {
    ($struct_name:ty,
        fields: { $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? }
        nested: { $( $nested:ident );* $(;)? }
    ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                $(
                    if let Some(ref nested) = self.$nested {
                        if let Err(nested_errors) = nested.validate() {
                            for err in nested_errors {
                                errors.push(format!("{}.{}", stringify!($nested), err));
                            }
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// get the current value of a given setting
#[macro_export]
macro_rules! getopt {
    () => {
        $crate::config::instance::config()
    };

    ($field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$field.clone(),
            $crate::config::options::PaletteCss::default()
                .$field
                .expect(concat!("Default value missing for: ", stringify!($field))),
        )
    }};

    ($lvl1:ident . $field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()),
            $crate::config::options::PaletteCss::default()
                .$lvl1
                .and_then(|sub| sub.$field)
                .expect(concat!(
                    "Default value missing for: ",
                    stringify!($lvl1),
                    ".",
                    stringify!($field)
                )),
        )
    }};

    (raw $field:ident) => {{
        $crate::config::instance::config()
            .ok()
            .and_then(|c| c.$field.clone())
    }};

    (raw $lvl1:ident . $field:ident) => {{
        $crate::config::instance::config()
            .ok()
            .and_then(|c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()))
    }};
}
