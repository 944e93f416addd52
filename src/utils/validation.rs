use crate::utils::error::{Result, SentimentError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SentimentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SentimentError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SentimentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SentimentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SentimentError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 以空白切分後的字數
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 檢查 headline：不可為空白，且字數必須嚴格小於 `max_length`
pub fn validate_headline(field_name: &str, headline: &str, max_length: usize) -> Result<()> {
    let words = word_count(headline);

    if words == 0 {
        return Err(SentimentError::ValidationError {
            field: field_name.to_string(),
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }

    if words >= max_length {
        return Err(SentimentError::ValidationError {
            field: field_name.to_string(),
            message: format!(
                "{} must contain fewer than {} words (got {})",
                field_name, max_length, words
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("inference_endpoint", "https://example.com").is_ok());
        assert!(validate_url("inference_endpoint", "http://localhost:8080/models").is_ok());
        assert!(validate_url("inference_endpoint", "").is_err());
        assert!(validate_url("inference_endpoint", "invalid-url").is_err());
        assert!(validate_url("inference_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_length", 5, 2).is_ok());
        assert!(validate_positive_number("max_length", 1, 2).is_err());
    }

    #[test]
    fn test_validate_headline_rejects_blank() {
        for blank in ["", "   ", "\t\n"] {
            let err = validate_headline("headline", blank, 10).unwrap_err();
            assert!(matches!(err, SentimentError::ValidationError { .. }));
        }
    }

    #[test]
    fn test_validate_headline_word_limit_is_exclusive() {
        assert!(validate_headline("headline", "one two three", 4).is_ok());
        assert!(validate_headline("headline", "one two three four", 4).is_err());
        assert!(validate_headline("headline", &"Headline ".repeat(4), 4).is_err());
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  Stock   market\trises \n"), 3);
        assert_eq!(word_count(""), 0);
    }
}
