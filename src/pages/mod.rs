mod blogs;
mod contact;
mod home;
mod not_found;
mod projects;
mod skills;

pub use blogs::BlogsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
