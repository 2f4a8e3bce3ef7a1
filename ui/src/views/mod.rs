mod home;
pub use home::Home;

mod about;
pub use about::About;
