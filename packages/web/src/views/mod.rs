mod login;
pub use login::Login;

mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod require_auth;
pub use require_auth::RequireAuth;
