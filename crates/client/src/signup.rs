//! Restaurant registration flow.

use manageshop_core::notify::{Notice, Notifier};
use manageshop_core::restaurant::{validate_registration, RegistrationForm};

use crate::client::ManageShopClient;
use crate::error::Result;

pub const REGISTRATION_COMPLETED: &str = "Your subscription was completed successfully";
pub const REGISTRATION_FAILED: &str = "Invalid Credentials";

/// Returns the dashboard path that signs in the registered manager.
pub fn login_path(email: &str) -> String {
    format!("/login?email={}", urlencoding::encode(email))
}

/// Validates the form, registers the restaurant and notifies the outcome.
///
/// Validation failures are returned without contacting the server or
/// notifying; they belong to the form, not to the registration.
pub async fn register_restaurant<N: Notifier>(
    client: &ManageShopClient,
    notifier: &N,
    form: &RegistrationForm,
) -> Result<()> {
    let request = validate_registration(form)?;

    match client.register_restaurant(&request).await {
        Ok(()) => {
            tracing::info!(restaurant = %request.restaurant_name, "Restaurant registered");
            notifier.notify(
                Notice::success(REGISTRATION_COMPLETED)
                    .with_action("Login", login_path(&request.email)),
            );
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Restaurant registration failed");
            notifier.notify(Notice::error(REGISTRATION_FAILED));
            Err(err)
        }
    }
}
