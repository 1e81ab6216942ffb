use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::{rocket_instance, sqlite, InstanceOptions};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    let connections = gigdb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    gigdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let rocket = rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
