mod home;

pub use home::{Home, HomeProps};
