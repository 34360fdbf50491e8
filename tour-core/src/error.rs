use std::{error, fmt};

use crate::catalog::{SightId, StopId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    UnknownSight(SightId),
    UnknownStop(StopId),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSight(id) => write!(f, "No sight with id {id}"),
            Self::UnknownStop(id) => write!(f, "No bus stop with id {id}"),
        }
    }
}
