//! Login Use Case

use std::sync::Arc;

use crate::application::session::AuthService;
use crate::domain::entity::session::LoginData;
use crate::domain::repository::AuthRepository;
use crate::error::AuthFailure;

/// Login use case
pub struct LoginUseCase<A>
where
    A: AuthRepository,
{
    service: Arc<AuthService<A>>,
}

impl<A> LoginUseCase<A>
where
    A: AuthRepository,
{
    pub fn new(service: Arc<AuthService<A>>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<LoginData, AuthFailure> {
        self.service.login(email, password).await
    }
}
