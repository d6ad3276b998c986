use crate::error::GridError;

/// Checks grid inputs before any placement happens.
///
/// The associated functions enforce what the generator itself needs. An
/// instance additionally carries the service limits applied to raw request
/// input at the HTTP boundary.
#[derive(Debug, Clone, Copy)]
pub struct WordValidator {
    default_size: usize,
    max_size: usize,
}

impl WordValidator {
    pub fn new(default_size: usize, max_size: usize) -> Self {
        Self {
            default_size,
            max_size,
        }
    }

    pub fn check_size(size: usize) -> Result<(), GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(0));
        }
        Ok(())
    }

    /// Check that `word` is non-empty, uppercase A-Z only and fits in `size`.
    /// `index` is the word's position in its list, reported for empty words.
    pub fn check_word(index: usize, word: &str, size: usize) -> Result<(), GridError> {
        if word.is_empty() {
            return Err(GridError::EmptyWord { index });
        }

        if let Some(ch) = word.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(GridError::InvalidCharacter {
                word: word.to_string(),
                ch,
            });
        }

        // ASCII only past this point, so bytes == letters
        if word.len() > size {
            return Err(GridError::WordTooLong {
                word: word.to_string(),
                len: word.len(),
                size,
            });
        }

        Ok(())
    }

    /// Resolve the requested size against the service defaults and limits
    pub fn resolve_size(&self, requested: Option<i64>) -> Result<usize, GridError> {
        let size = match requested {
            None => return Ok(self.default_size),
            Some(size) if size <= 0 => return Err(GridError::InvalidSize(size)),
            Some(size) => usize::try_from(size).map_err(|_| GridError::InvalidSize(size))?,
        };

        if size > self.max_size {
            return Err(GridError::SizeTooLarge {
                size,
                max: self.max_size,
            });
        }

        Ok(size)
    }

    /// Trim and upper-case raw words, then check each one against `size`
    pub fn normalize_words(&self, words: &[String], size: usize) -> Result<Vec<String>, GridError> {
        words
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let word = raw.trim().to_uppercase();
                Self::check_word(index, &word, size)?;
                Ok(word)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> WordValidator {
        WordValidator::new(10, 100)
    }

    #[test]
    fn test_check_size_rejects_zero() {
        assert_eq!(WordValidator::check_size(0), Err(GridError::InvalidSize(0)));
        assert!(WordValidator::check_size(1).is_ok());
    }

    #[test]
    fn test_check_word() {
        assert!(WordValidator::check_word(0, "HELLO", 5).is_ok());
        assert_eq!(
            WordValidator::check_word(3, "", 5),
            Err(GridError::EmptyWord { index: 3 })
        );
        assert_eq!(
            WordValidator::check_word(0, "ABCD", 3),
            Err(GridError::WordTooLong {
                word: "ABCD".to_string(),
                len: 4,
                size: 3,
            })
        );
        assert_eq!(
            WordValidator::check_word(0, "hello", 5),
            Err(GridError::InvalidCharacter {
                word: "hello".to_string(),
                ch: 'h',
            })
        );
    }

    #[test]
    fn test_resolve_size() {
        let v = validator();
        assert_eq!(v.resolve_size(None), Ok(10));
        assert_eq!(v.resolve_size(Some(7)), Ok(7));
        assert_eq!(v.resolve_size(Some(0)), Err(GridError::InvalidSize(0)));
        assert_eq!(v.resolve_size(Some(-3)), Err(GridError::InvalidSize(-3)));
        assert_eq!(
            v.resolve_size(Some(101)),
            Err(GridError::SizeTooLarge { size: 101, max: 100 })
        );
    }

    #[test]
    fn test_normalize_words_uppercases_and_trims() {
        let words = vec![" cat ".to_string(), "Dog".to_string()];
        let normalized = validator().normalize_words(&words, 5).unwrap();
        assert_eq!(normalized, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_normalize_words_reports_first_offender() {
        let words = vec!["ok".to_string(), "toolong".to_string(), "x y".to_string()];
        let err = validator().normalize_words(&words, 4).unwrap_err();
        assert!(matches!(err, GridError::WordTooLong { ref word, .. } if word == "TOOLONG"));
    }

    #[test]
    fn test_normalize_words_reports_blank_word_position() {
        let words = vec!["cat".to_string(), "   ".to_string()];
        let err = validator().normalize_words(&words, 5).unwrap_err();
        assert_eq!(err, GridError::EmptyWord { index: 1 });
        assert_eq!(err.to_string(), "Word #2 is empty");
    }

    #[test]
    fn test_normalize_words_rejects_non_letters() {
        let words = vec!["o'neil".to_string()];
        let err = validator().normalize_words(&words, 10).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCharacter {
                word: "O'NEIL".to_string(),
                ch: '\'',
            }
        );
    }
}
