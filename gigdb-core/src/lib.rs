pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use gigdb_entities::{artist::*, id::*, show::*, time::*, venue::*};
}

pub mod db {
    pub use super::{entities::*, repositories::*};
}
