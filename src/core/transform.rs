use crate::domain::model::{Platform, Token, TokenSet};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SNAKE_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([a-z])").unwrap());

/// snake_case to camelCase. Only `_` followed by a lowercase ASCII letter is
/// folded; `_1` or `_A` are kept as they are.
pub fn to_camel(alias: &str) -> String {
    SNAKE_SEGMENT
        .replace_all(alias, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Replaces every `from` that ends on an ASCII word boundary with `to`. Purely
/// textual, no scaling. Non-ASCII letters count as non-word characters, so
/// `10pxé` becomes `10pté`.
pub fn convert_units(value: &str, from: &str, to: &str) -> String {
    UnitConversion::new(from, to).apply(value)
}

#[derive(Debug, Clone)]
pub struct UnitConversion {
    pattern: Regex,
    to: String,
}

impl UnitConversion {
    pub fn new(from: &str, to: &str) -> Self {
        // escaped input always yields a valid pattern
        let pattern = Regex::new(&format!(r"{}(?-u:\b)", regex::escape(from))).unwrap();
        Self {
            pattern,
            to: to.to_string(),
        }
    }

    pub fn apply(&self, value: &str) -> String {
        self.pattern
            .replace_all(value, regex::NoExpand(&self.to))
            .into_owned()
    }
}

const SOURCE_UNIT: &str = "px";

/// Builds the three platform mappings from tokens in row order.
pub struct PlatformEmitter {
    ios_units: UnitConversion,
    android_units: UnitConversion,
}

impl PlatformEmitter {
    pub fn new() -> Self {
        Self {
            ios_units: UnitConversion::new(SOURCE_UNIT, target_unit(Platform::Ios)),
            android_units: UnitConversion::new(SOURCE_UNIT, target_unit(Platform::Android)),
        }
    }

    pub fn emit(&self, tokens: &[Token]) -> TokenSet {
        let mut set = TokenSet::default();

        for token in tokens {
            let camel = to_camel(&token.alias);

            if set
                .web
                .insert(token.alias.clone(), token.value.clone())
                .is_some()
            {
                tracing::warn!("Duplicate alias '{}', keeping the later value", token.alias);
            }
            set.ios
                .insert(camel.clone(), self.ios_units.apply(&token.value));
            set.android
                .insert(camel, self.android_units.apply(&token.value));
        }

        tracing::debug!(
            "Emitted {} web, {} ios, {} android entries",
            set.web.len(),
            set.ios.len(),
            set.android.len()
        );
        set
    }
}

impl Default for PlatformEmitter {
    fn default() -> Self {
        Self::new()
    }
}

fn target_unit(platform: Platform) -> &'static str {
    platform.target_unit().unwrap_or(SOURCE_UNIT)
}
