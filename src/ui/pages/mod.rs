//! Application pages
//!
//! - Welcome page and the public piercing/tattoo catalogs
//! - Login page
//! - Admin home and the two admin catalogs (behind the session gate)

mod admin;
mod admin_piercings;
mod admin_tattoos;
mod landing;
mod login;
mod not_found;
mod piercings;
mod tattoos;

pub use admin::AdminHomePage;
pub use admin_piercings::AdminPiercingsPage;
pub use admin_tattoos::AdminTattoosPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use piercings::PiercingsPage;
pub use tattoos::TattoosPage;
