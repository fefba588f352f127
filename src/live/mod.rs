//! Live synchronization layer: broadcast hub, client sessions and the
//! provisional/confirmed merge view.

mod hub;
mod session;
mod view;

pub use hub::{
    LiveHub, MatchMessage, MatchMessageKind, MatchSubscription, TournamentMessage,
    TournamentSubscription,
};
pub use session::Session;
pub use view::LiveScoreView;
