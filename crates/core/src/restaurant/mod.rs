mod error;
mod requests;
mod types;
mod validation;

pub use error::FormError;
pub use requests::{RegisterRestaurantRequest, UpdateProfileRequest};
pub use types::{ManagedRestaurant, MonthOrdersAmount, StoreProfile};
pub use validation::{
    validate_email, validate_profile, validate_registration, ProfileForm, RegistrationForm,
};
