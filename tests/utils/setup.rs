use std::sync::Arc;

use axum::Router;
use courtside::{router, AppState, InMemoryGameRepository};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    #[allow(dead_code)]
    pub repository: Arc<InMemoryGameRepository>,
    pub token: Option<String>,
}

pub struct TestSetupBuilder {
    roster_size: Option<usize>,
    token: Option<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            roster_size: None,
            token: Some("test-session-token".to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn with_roster_size(mut self, roster_size: usize) -> Self {
        self.roster_size = Some(roster_size);
        self
    }

    #[allow(dead_code)]
    pub fn without_session(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryGameRepository::new());
        let mut state = AppState::new(repository.clone());
        if let Some(size) = self.roster_size {
            state = state.with_default_roster_size(size);
        }

        TestSetup {
            app: router(state),
            repository,
            token: self.token,
        }
    }
}
