//! Page Components

mod home;
mod checkout;

pub use home::HomePage;
pub use checkout::CheckoutPage;
