pub mod get_current_user;
pub mod login;
pub mod logout;

pub use get_current_user::GetCurrentUserUseCase;
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
