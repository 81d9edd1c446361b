use crate::types::Domain;
use thiserror::Error;
use time::Date;

/// Errors raised by the user-state aggregate and the session layer on top of
/// it. Expected absent-value states ("no action today") are `Option`s, not
/// errors.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("an action is already recorded for {date}")]
    DuplicateDate { date: Date },

    #[error("no action with id {id}")]
    UnknownAction { id: String },

    #[error("no action recorded for {date}")]
    NoActionFor { date: Date },

    #[error("action {id} already has a recorded outcome")]
    AlreadyResolved { id: String },

    #[error("no focus area selected")]
    NoDomainSelected,

    #[error("{domain} is a premium focus area")]
    PremiumRequired { domain: Domain },

    #[error("custom themes require a premium subscription")]
    ThemeLocked,

    #[error("unknown content pack {pack_id}")]
    UnknownPack { pack_id: String },

    #[error("pack {pack_id} has not been purchased")]
    PackNotOwned { pack_id: String },
}
