// Public API - what other modules can use
pub use handlers::{
    clear_team, create_game, delete_game, get_comparison, get_game, reset_side, select_team,
    set_game_date, set_quarter_points, update_player_stat,
};
pub use routes::router;

// Internal modules
mod handlers;
pub mod repository;
mod routes;
pub mod types;
