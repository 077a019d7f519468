//! Locale-aware string ordering for the sort stage.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use icu_provider::DataLocale;
use roster_core::errors::{RosterError, RosterResult};

/// Locale used when configuration does not name one.
pub const DEFAULT_LOCALE: &str = "es";

/// Wraps an ICU collator so "Ángel" sorts next to "Angel" instead of after "Zoe".
pub struct Collation {
    locale: String,
    collator: Collator,
}

impl Collation {
    pub fn new(tag: &str) -> RosterResult<Self> {
        let locale: Locale = tag.parse().map_err(|e| {
            RosterError::invalid_argument(format!("invalid collation locale '{tag}': {e}"))
                .into_anyhow()
        })?;

        let collator = Collator::try_new(&DataLocale::from(&locale), CollatorOptions::new())
            .map_err(|e| {
                RosterError::general_error(format!("no collation data for '{tag}': {e}"))
                    .into_anyhow()
            })?;

        Ok(Self {
            locale: tag.to_string(),
            collator,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::errors::ErrorKind;

    #[test]
    fn accented_initials_sort_with_their_base_letter() {
        let c = Collation::new(DEFAULT_LOCALE).unwrap();
        assert_eq!(c.compare("Álvaro", "Bruno"), Ordering::Less);
        assert_eq!(c.compare("Óscar", "Pablo"), Ordering::Less);
        // codepoint order would put 'Á' (U+00C1) after 'Z'
        assert_eq!(c.compare("Zoe", "Álvaro"), Ordering::Greater);
    }

    #[test]
    fn spanish_enye_follows_n() {
        let c = Collation::new("es").unwrap();
        assert_eq!(c.compare("Nuñez", "Nuza"), Ordering::Less);
        assert_eq!(c.compare("Muñoz", "Munoz"), Ordering::Greater);
    }

    #[test]
    fn garbage_locale_is_invalid_argument() {
        let err = Collation::new("not a locale!").unwrap_err();
        assert_eq!(RosterError::kind_of(&err), ErrorKind::InvalidArgument);
    }
}
