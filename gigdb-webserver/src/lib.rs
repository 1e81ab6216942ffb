#[macro_use]
extern crate log;

use gigdb_db_sqlite::Connections;

mod web;

pub async fn run(connections: Connections) {
    web::run(connections.into()).await;
}
