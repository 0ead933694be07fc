//! Register Use Case

use std::sync::Arc;

use crate::application::session::AuthService;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthRepository, RegisterInput};
use crate::error::AuthFailure;

/// Account registration use case
pub struct RegisterUseCase<A>
where
    A: AuthRepository,
{
    service: Arc<AuthService<A>>,
}

impl<A> RegisterUseCase<A>
where
    A: AuthRepository,
{
    pub fn new(service: Arc<AuthService<A>>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, input: &RegisterInput) -> Result<User, AuthFailure> {
        self.service.register(input).await
    }
}
