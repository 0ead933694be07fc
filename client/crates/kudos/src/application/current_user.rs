//! Current User Use Case

use std::sync::Arc;

use crate::application::session::AuthService;
use crate::domain::entity::user::User;
use crate::domain::repository::AuthRepository;

/// Current user use case
pub struct CurrentUserUseCase<A>
where
    A: AuthRepository,
{
    service: Arc<AuthService<A>>,
}

impl<A> CurrentUserUseCase<A>
where
    A: AuthRepository,
{
    pub fn new(service: Arc<AuthService<A>>) -> Self {
        Self { service }
    }

    /// `None` means "not authenticated", including every failure mode
    pub async fn execute(&self) -> Option<User> {
        self.service.current_user().await
    }
}
