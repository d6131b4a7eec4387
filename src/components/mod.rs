pub mod card;
pub mod navbar;

pub use card::{MemberCard, MemberGrid};
pub use navbar::{NavLink, Navbar};
