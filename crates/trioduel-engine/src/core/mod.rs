pub use self::{character::*, roster::*, team::*};

pub(crate) mod character;
pub(crate) mod roster;
pub(crate) mod team;
