//! What observers are told about the quarry's moves.
//!
//! On a reveal round the true destination is published. Otherwise the
//! reported destination is the most recent publicly known location. The
//! ticket kind is always reported as played, so a secret ticket hides the
//! transport even on a reveal round.

use crate::core::{DoubleMove, TicketMove};
use crate::network::Location;

/// Reported form of a single quarry ticket move.
///
/// `last_known` is the public location after any reveal this move causes.
#[must_use]
pub fn report_single(mv: TicketMove, reveal: bool, last_known: Location) -> TicketMove {
    if reveal {
        mv
    } else {
        mv.reported_at(last_known)
    }
}

/// Reported legs of a double move, computed before either leg is applied.
///
/// - first leg: true destination on a reveal round, else `last_known`
/// - second leg: true destination on a reveal round, else the first leg's
///   destination if that was just revealed, else `last_known`
///
/// `last_known` is the value from before the double move. A second leg on a
/// hidden round following a hidden first leg therefore still reports the
/// pre-move location.
#[must_use]
pub fn report_double(
    mv: DoubleMove,
    first_reveal: bool,
    second_reveal: bool,
    last_known: Location,
) -> DoubleMove {
    let first_seen = if first_reveal {
        mv.first.destination
    } else {
        last_known
    };
    let second_seen = if second_reveal {
        mv.second.destination
    } else {
        first_seen
    };

    DoubleMove::new(
        mv.colour,
        mv.first.reported_at(first_seen),
        mv.second.reported_at(second_seen),
    )
}
