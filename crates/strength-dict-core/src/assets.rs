//! Build-time manifest of the embedded dictionary assets.
//!
//! Every asset under `data/` is baked into the binary with `include_str!`,
//! so the embedded source needs no files at runtime.

use crate::dictionaries::LogicalName;

/// Generates the manifest table and the exhaustive lookup function.
macro_rules! embedded_assets {
    ($($name:ident => $file:literal),* $(,)?) => {
        /// `(logical name, file name)` for every embedded asset, in manifest order.
        pub const MANIFEST: &[(LogicalName, &str)] = &[
            $( (LogicalName::$name, $file), )*
        ];

        /// Raw text of the embedded asset for `name`.
        pub const fn embedded_asset(name: LogicalName) -> &'static str {
            match name {
                $( LogicalName::$name => include_str!(concat!("../data/", $file)), )*
            }
        }
    };
}

embedded_assets! {
    NamedNumbers => "named-numbers.json",
    CharacterSets => "character-sets.json",
    Periods => "periods.json",
    Top10 => "top10.json",
    Top10k => "top10k.json",
    Patterns => "patterns.json",
}
