//! Logout Use Case

use std::sync::Arc;

use crate::application::session::{AuthService, LogoutSummary};
use crate::domain::repository::AuthRepository;

/// Logout use case
pub struct LogoutUseCase<A>
where
    A: AuthRepository,
{
    service: Arc<AuthService<A>>,
}

impl<A> LogoutUseCase<A>
where
    A: AuthRepository,
{
    pub fn new(service: Arc<AuthService<A>>) -> Self {
        Self { service }
    }

    pub async fn execute(&self) -> LogoutSummary {
        self.service.logout().await
    }
}
