//! Domain layer: strong types with validation and invariants (no I/O).

mod page;
mod region;
mod validation;
mod value;

pub use page::{PageStart, is_last_page, is_last_page_by_count};
pub use region::Region;
pub use validation::ValidationError;
pub use value::{AppKey, AppSecret, BearerToken, KeyId, KeySecret, Password, ProjectId, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_id_rejects_empty() {
        assert!(matches!(
            KeyId::new("   "),
            Err(ValidationError::Empty {
                field: KeyId::FIELD
            })
        ));
    }

    #[test]
    fn key_id_trims_surrounding_whitespace() {
        let key = KeyId::new(" abc ").unwrap();
        assert_eq!(key.as_str(), "abc");
    }

    #[test]
    fn key_secret_rejects_empty() {
        assert!(matches!(
            KeySecret::new(""),
            Err(ValidationError::Empty {
                field: KeySecret::FIELD
            })
        ));
    }

    #[test]
    fn app_secret_decodes_base64_key_material() {
        let secret = AppSecret::new("BeIukql3pTKJ8RGL5zo0DA==").unwrap();
        assert_eq!(secret.as_str(), "BeIukql3pTKJ8RGL5zo0DA==");
        assert_eq!(secret.key_bytes().len(), 16);
    }

    #[test]
    fn app_secret_rejects_invalid_base64() {
        assert!(matches!(
            AppSecret::new("not base64!!!"),
            Err(ValidationError::InvalidBase64 {
                field: AppSecret::FIELD
            })
        ));
    }

    #[test]
    fn bearer_token_rejects_empty() {
        assert!(BearerToken::new("  ").is_err());
        assert!(BearerToken::new("tok").is_ok());
    }

    #[test]
    fn basic_pair_validation() {
        assert!(Username::new(" ").is_err());
        assert!(Password::new("").is_err());
        assert_eq!(Password::new(" p ").unwrap().as_str(), " p ");
    }
}
