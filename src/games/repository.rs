use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::scoreboard::Scoreboard;
use crate::shared::AppError;

/// A live game session; edits are serialized through its mutex
pub type SharedScoreboard = Arc<AsyncMutex<Scoreboard>>;

/// Trait for game session storage
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, scoreboard: Scoreboard) -> Result<Uuid, AppError>;
    async fn get_game(&self, game_id: Uuid) -> Result<Option<SharedScoreboard>, AppError>;
    /// Returns `false` when no such game existed
    async fn delete_game(&self, game_id: Uuid) -> Result<bool, AppError>;
}

/// In-memory game sessions; everything is lost on restart
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<Uuid, SharedScoreboard>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, scoreboard))]
    async fn create_game(&self, scoreboard: Scoreboard) -> Result<Uuid, AppError> {
        let game_id = Uuid::new_v4();
        let mut games = self.games.write().await;
        games.insert(game_id, Arc::new(AsyncMutex::new(scoreboard)));

        debug!(game_id = %game_id, games = games.len(), "Game session created in memory");
        Ok(game_id)
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: Uuid) -> Result<Option<SharedScoreboard>, AppError> {
        let games = self.games.read().await;
        let game = games.get(&game_id).cloned();

        if game.is_none() {
            debug!(game_id = %game_id, "Game session not found in memory");
        }
        Ok(game)
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, game_id: Uuid) -> Result<bool, AppError> {
        let removed = self.games.write().await.remove(&game_id).is_some();
        debug!(game_id = %game_id, removed, "Game session deleted from memory");
        Ok(removed)
    }
}
