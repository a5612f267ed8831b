use super::error::FormError;
use super::requests::RegisterRestaurantRequest;
use super::types::StoreProfile;

/// Raw input of the store profile dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub description: Option<String>,
}

/// Raw input of the restaurant registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

/// Validates the store profile form.
///
/// The name must not be blank. A blank description is submitted as `None`
/// so that clearing the field clears the stored description.
///
/// # Examples
///
/// ```
/// use manageshop_core::restaurant::{validate_profile, ProfileForm};
///
/// let form = ProfileForm { name: "Cafe B".into(), description: Some("  ".into()) };
/// let profile = validate_profile(&form).unwrap();
/// assert_eq!(profile.name, "Cafe B");
/// assert_eq!(profile.description, None);
///
/// let blank = ProfileForm { name: " ".into(), description: None };
/// assert!(validate_profile(&blank).is_err());
/// ```
pub fn validate_profile(form: &ProfileForm) -> Result<StoreProfile, FormError> {
    if form.name.trim().is_empty() {
        return Err(FormError::EmptyStoreName);
    }
    let description = form
        .description
        .as_ref()
        .filter(|d| !d.trim().is_empty())
        .cloned();
    Ok(StoreProfile::new(form.name.clone(), description))
}

/// Validates the restaurant registration form.
pub fn validate_registration(
    form: &RegistrationForm,
) -> Result<RegisterRestaurantRequest, FormError> {
    if form.restaurant_name.trim().is_empty() {
        return Err(FormError::EmptyRestaurantName);
    }
    if form.manager_name.trim().is_empty() {
        return Err(FormError::EmptyManagerName);
    }
    validate_email(&form.email)?;
    Ok(RegisterRestaurantRequest {
        restaurant_name: form.restaurant_name.clone(),
        manager_name: form.manager_name.clone(),
        email: form.email.trim().to_string(),
        phone: form.phone.clone(),
    })
}

/// Checks that an email address has the `local@domain.tld` shape.
///
/// This is a syntactic check only; deliverability is the server's concern.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    let invalid = || FormError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    // Domain needs a dot with non-empty labels on both sides
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() || host.starts_with('.') || host.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            restaurant_name: "Cafe A".to_string(),
            manager_name: "Ana".to_string(),
            email: "ana@cafe.com".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    // ==================== validate_profile ====================

    #[test]
    fn profile_keeps_description() {
        let form = ProfileForm {
            name: "Cafe A".to_string(),
            description: Some("Best coffee".to_string()),
        };
        let profile = validate_profile(&form).unwrap();
        assert_eq!(profile.description.as_deref(), Some("Best coffee"));
    }

    #[test]
    fn profile_rejects_empty_name() {
        let form = ProfileForm::default();
        assert_eq!(validate_profile(&form), Err(FormError::EmptyStoreName));
    }

    #[test]
    fn profile_rejects_whitespace_name() {
        let form = ProfileForm {
            name: "   ".to_string(),
            description: None,
        };
        assert_eq!(validate_profile(&form), Err(FormError::EmptyStoreName));
    }

    #[test]
    fn profile_blank_description_becomes_none() {
        let form = ProfileForm {
            name: "Cafe A".to_string(),
            description: Some(String::new()),
        };
        assert_eq!(validate_profile(&form).unwrap().description, None);
    }

    // ==================== validate_registration ====================

    #[test]
    fn registration_accepts_valid_form() {
        let request = validate_registration(&registration()).unwrap();
        assert_eq!(request.restaurant_name, "Cafe A");
        assert_eq!(request.email, "ana@cafe.com");
    }

    #[test]
    fn registration_allows_empty_phone() {
        let form = RegistrationForm {
            phone: String::new(),
            ..registration()
        };
        assert!(validate_registration(&form).is_ok());
    }

    #[test]
    fn registration_rejects_empty_restaurant_name() {
        let form = RegistrationForm {
            restaurant_name: String::new(),
            ..registration()
        };
        assert_eq!(
            validate_registration(&form),
            Err(FormError::EmptyRestaurantName)
        );
    }

    #[test]
    fn registration_rejects_empty_manager_name() {
        let form = RegistrationForm {
            manager_name: " ".to_string(),
            ..registration()
        };
        assert_eq!(
            validate_registration(&form),
            Err(FormError::EmptyManagerName)
        );
    }

    #[test]
    fn registration_rejects_bad_email() {
        let form = RegistrationForm {
            email: "ana".to_string(),
            ..registration()
        };
        assert!(matches!(
            validate_registration(&form),
            Err(FormError::InvalidEmail(_))
        ));
    }

    // ==================== validate_email ====================

    #[test]
    fn email_accepts_common_addresses() {
        assert!(validate_email("ana@cafe.com").is_ok());
        assert!(validate_email("ana.maria+orders@mail.cafe.com.br").is_ok());
        assert!(validate_email("  ana@cafe.com  ").is_ok());
    }

    #[test]
    fn email_rejects_missing_at() {
        assert!(validate_email("cafe.com").is_err());
    }

    #[test]
    fn email_rejects_empty_local_part() {
        assert!(validate_email("@cafe.com").is_err());
    }

    #[test]
    fn email_rejects_missing_tld() {
        assert!(validate_email("ana@cafe").is_err());
        assert!(validate_email("ana@cafe.").is_err());
        assert!(validate_email("ana@.com").is_err());
    }

    #[test]
    fn email_rejects_inner_whitespace_and_double_at() {
        assert!(validate_email("ana maria@cafe.com").is_err());
        assert!(validate_email("ana@@cafe.com").is_err());
    }

    #[test]
    fn email_rejects_empty() {
        assert!(validate_email("").is_err());
    }
}
